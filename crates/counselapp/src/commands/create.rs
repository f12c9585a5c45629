use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::CounselorForm;
use crate::model::{Counselor, RecordId, UserStatus};
use crate::store::RecordStore;

pub fn run<S: RecordStore<Counselor>>(
    store: &mut S,
    form: &CounselorForm,
    id_floor: RecordId,
) -> Result<CmdResult<Counselor>> {
    let draft = form.validate()?;

    let counselor = Counselor {
        id: store.next_id(id_floor),
        college: draft.college_assignment.clone(),
        status: UserStatus::Active,
        email: draft.email,
        first_name: draft.first_name,
        last_name: draft.last_name,
        birthdate: draft.birthdate,
        starting_shift: draft.starting_shift,
        ending_shift: draft.ending_shift,
        college_assignment: draft.college_assignment,
    };

    let mut result = CmdResult::default();
    // Duplicate emails are allowed through; only flag them.
    if store.records().iter().any(|c| c.email == counselor.email) {
        tracing::warn!(email = %counselor.email, "email already used by another counselor");
        result.add_message(CmdMessage::warning(format!(
            "Another counselor already uses {}",
            counselor.email
        )));
    }

    store.append(counselor.clone())?;
    tracing::info!(id = counselor.id, email = %counselor.email, "counselor created");

    result.add_message(CmdMessage::success(format!(
        "Counselor created ({}): {}",
        counselor.id, counselor.email
    )));
    Ok(result.with_affected(vec![counselor]))
}
