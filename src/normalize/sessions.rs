use crate::openf1::Session;

/// Pick the most recent session.
///
/// When every session carries a parseable `date_start` the latest start wins
/// (ties resolved toward the later array position). Otherwise the upstream
/// order is trusted and the last element is taken.
pub fn latest_session(sessions: &[Session]) -> Option<&Session> {
    let dated: Option<Vec<_>> = sessions
        .iter()
        .map(|s| s.started_at().map(|start| (start, s)))
        .collect();

    match dated {
        Some(dated) => dated
            .into_iter()
            .max_by_key(|(start, _)| *start)
            .map(|(_, s)| s),
        None => sessions.last(),
    }
}
