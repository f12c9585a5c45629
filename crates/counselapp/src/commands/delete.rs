use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Counselor, RecordId};
use crate::store::RecordStore;

pub fn run<S: RecordStore<Counselor>>(store: &mut S, id: RecordId) -> Result<CmdResult<Counselor>> {
    let removed = store.remove(id)?;
    tracing::info!(id, email = %removed.email, "counselor deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Counselor deleted ({}): {}",
        removed.id, removed.email
    )));
    Ok(result.with_affected(vec![removed]))
}
