use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CounselError, Result};
use crate::forms::CounselorPatch;
use crate::model::{Collection, Counselor, RecordId};
use crate::store::RecordStore;

pub fn run<S: RecordStore<Counselor>>(
    store: &mut S,
    id: RecordId,
    patch: &CounselorPatch,
) -> Result<CmdResult<Counselor>> {
    let mut counselor = store
        .get(id)
        .cloned()
        .ok_or(CounselError::NotFound {
            collection: Collection::Counselors,
            id,
        })?;
    let changes = patch.validate()?;

    let mut result = CmdResult::default();
    if let Some(email) = &changes.email {
        if store
            .records()
            .iter()
            .any(|c| c.id != id && &c.email == email)
        {
            tracing::warn!(%email, "email already used by another counselor");
            result.add_message(CmdMessage::warning(format!(
                "Another counselor already uses {}",
                email
            )));
        }
    }

    changes.apply(&mut counselor);
    store.replace(counselor.clone())?;
    tracing::info!(id, "counselor updated");

    result.add_message(CmdMessage::success(format!(
        "Counselor updated ({}): {}",
        counselor.id, counselor.email
    )));
    Ok(result.with_affected(vec![counselor]))
}
