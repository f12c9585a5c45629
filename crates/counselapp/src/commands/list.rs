use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter_records, FilterState};
use crate::model::Record;
use crate::store::RecordStore;

pub fn run<R: Record, S: RecordStore<R>>(store: &S, filter: &FilterState) -> Result<CmdResult<R>> {
    let listed = filter_records(store.records(), filter);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} found for the current search and filters.",
            R::COLLECTION
        )));
    }
    Ok(result.with_listed(listed))
}
