//! Command state machine tests: Created -> Executed, result access, backend
//! validation and re-execution, exercised through every concrete command.

use serde_json::{json, Value};

use super::fakes::{Bare, Catalog, Resolver};
use crate::{
    Command, Context, Error, ErrorKind, GetIdsCommand, LookupCommand, ParamBag, RandomCommand,
    RecordCollection, ReexecutionPolicy, RetrieveBatchCommand, RetrieveCommand, SearchCommand,
    SimilarCommand,
};

fn browzine() -> Catalog {
    Catalog::new("BrowZine").with_lookup("doi-value", "foo")
}

fn assert_fresh<C: Command>(cmd: &C, backend: &str) {
    assert!(!cmd.is_executed());
    assert_eq!(cmd.target_identifier(), backend);
    let err = cmd.result().err().expect("result before execute must fail");
    assert!(matches!(err, Error::NotYetExecuted { .. }));
    assert_eq!(err.kind(), ErrorKind::Logic);
}

// =============================================================================
// Lookup scenarios
// =============================================================================

#[test]
fn test_lookup_against_matching_backend() {
    let backend = browzine();
    let mut cmd = LookupCommand::new("BrowZine", "doi-value", None);
    assert_fresh(&cmd, "BrowZine");

    cmd.execute(&backend).unwrap();

    assert!(cmd.is_executed());
    assert_eq!(cmd.result().unwrap(), &json!("foo"));
    assert_eq!(cmd.target_identifier(), "BrowZine");
}

#[test]
fn test_lookup_against_mismatched_backend() {
    let backend = Catalog::new("WorldCat").with_lookup("doi-value", "foo");
    let mut cmd = LookupCommand::new("BrowZine", "doi-value", None);

    let err = cmd.execute(&backend).err().unwrap();

    assert_eq!(
        err,
        Error::BackendMismatch {
            expected: "BrowZine".into(),
            actual: "WorldCat".into(),
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("BrowZine") && msg.contains("WorldCat"));
    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert!(!cmd.is_executed());
    assert!(backend.calls().is_empty(), "mismatched backend must not be called");
}

#[test]
fn test_null_result_is_still_executed() {
    let backend = browzine();
    let mut cmd = LookupCommand::new("BrowZine", "unknown-doi", None);
    cmd.execute(&backend).unwrap();
    assert!(cmd.is_executed());
    assert_eq!(cmd.result().unwrap(), &Value::Null);
}

#[test]
fn test_params_reach_backend() {
    let backend = Resolver { id: "BrowZine" };
    let mut params = ParamBag::new();
    params.add("issn", "1234-5678");
    let mut cmd = LookupCommand::new("BrowZine", "doi", params);
    assert_eq!(cmd.search_parameters().first("issn"), Some(&json!("1234-5678")));

    cmd.execute(&backend).unwrap();
    assert_eq!(
        cmd.into_result().unwrap(),
        json!({"key": "doi", "params": ["issn=1234-5678"]})
    );
}

// =============================================================================
// Every command starts fresh and finishes executed
// =============================================================================

#[test]
fn test_all_commands_start_unexecuted() {
    assert_fresh(&SearchCommand::new("Solr", "war", None), "Solr");
    assert_fresh(&RetrieveCommand::new("Solr", "1", None), "Solr");
    assert_fresh(&RetrieveBatchCommand::new("Solr", ["1", "2"], None), "Solr");
    assert_fresh(&SimilarCommand::new("Solr", "1", None), "Solr");
    assert_fresh(&RandomCommand::new("Solr", "war", 3, None), "Solr");
    assert_fresh(&GetIdsCommand::new("Solr", "war", None), "Solr");
    assert_fresh(&LookupCommand::new("Solr", "doi", None), "Solr");
}

#[test]
fn test_contexts_and_defaults() {
    let search = SearchCommand::new("Solr", "war", None);
    assert_eq!(search.context(), &Context::Search);
    assert_eq!(search.offset(), 0);
    assert_eq!(search.limit(), crate::DEFAULT_LIMIT);
    assert!(search.search_parameters().is_empty());

    assert_eq!(RetrieveCommand::new("Solr", "1", None).context(), &Context::Retrieve);
    assert_eq!(
        RetrieveBatchCommand::new("Solr", ["1"], None).context(),
        &Context::RetrieveBatch
    );
    assert_eq!(SimilarCommand::new("Solr", "1", None).context(), &Context::Similar);
    assert_eq!(RandomCommand::with_default_limit("Solr", "x", None).limit(), 20);
    assert_eq!(GetIdsCommand::new("Solr", "x", None).context(), &Context::GetIds);
    assert_eq!(LookupCommand::new("Solr", "x", None).context(), &Context::Lookup);

    let custom = SearchCommand::new("Solr", "x", None).with_context(Context::from("workset"));
    assert_eq!(custom.context(), &Context::Other("workset".into()));
}

#[test]
fn test_search_executes_with_paging() {
    let backend = Catalog::new("Solr");
    let mut cmd = SearchCommand::new("Solr", "war peace", None)
        .with_offset(1)
        .with_limit(2);
    cmd.execute(&backend).unwrap();

    let rc: &RecordCollection = cmd.result().unwrap();
    assert_eq!(rc.total, 3);
    assert_eq!(rc.offset, 1);
    assert_eq!(rc.ids(), vec!["3", "4"]);
    assert_eq!(backend.calls(), vec!["search:1:2"]);
}

#[test]
fn test_retrieve_similar_random() {
    let backend = Catalog::new("Solr");

    let mut retrieve = RetrieveCommand::new("Solr", "5", None);
    retrieve.execute(&backend).unwrap();
    assert_eq!(retrieve.result().unwrap().ids(), vec!["5"]);

    let mut missing = RetrieveCommand::new("Solr", "99", None);
    missing.execute(&backend).unwrap();
    assert!(missing.result().unwrap().is_empty());

    let mut similar = SimilarCommand::new("Solr", "1", None);
    similar.execute(&backend).unwrap();
    assert_eq!(similar.result().unwrap().len(), 4);

    let mut random = RandomCommand::new("Solr", "war", 2, None);
    random.execute(&backend).unwrap();
    assert_eq!(random.result().unwrap().len(), 2);
}

// =============================================================================
// Failure paths
// =============================================================================

#[test]
fn test_backend_error_propagates_unchanged() {
    let backend = Catalog::new("Solr").failing("connection refused");
    let mut cmd = SearchCommand::new("Solr", "war", None);

    let err = cmd.execute(&backend).err().unwrap();

    assert_eq!(err, Error::backend("Solr", "connection refused"));
    assert!(!cmd.is_executed());
    assert!(matches!(cmd.result(), Err(Error::NotYetExecuted { .. })));
}

#[test]
fn test_missing_capability() {
    let backend = Bare("Solr");
    let mut cmd = SimilarCommand::new("Solr", "1", None);
    let err = cmd.execute(&backend).err().unwrap();
    assert_eq!(
        err,
        Error::UnsupportedOperation {
            backend: "Solr".into(),
            operation: "similar".into(),
        }
    );
    assert!(!cmd.is_executed());
}

#[test]
fn test_mismatch_checked_before_capability() {
    let mut cmd = SimilarCommand::new("Solr", "1", None);
    let err = cmd.execute(&Bare("Summon")).err().unwrap();
    assert!(matches!(err, Error::BackendMismatch { .. }));
}

// =============================================================================
// Re-execution
// =============================================================================

#[test]
fn test_reexecution_rejected_by_default() {
    let backend = Catalog::new("Solr");
    let mut cmd = RetrieveCommand::new("Solr", "1", None);
    cmd.execute(&backend).unwrap();

    let err = cmd.execute(&backend).err().unwrap();
    assert_eq!(
        err,
        Error::AlreadyExecuted {
            command: "RetrieveCommand".into()
        }
    );
    assert!(err.is_logic_error());
    assert_eq!(cmd.result().unwrap().ids(), vec!["1"]);
    assert_eq!(backend.calls().len(), 1);
}

#[test]
fn test_reexecution_overwrite_replaces_result() {
    let first = Catalog::new("BrowZine").with_lookup("doi", "old");
    let second = Catalog::new("BrowZine").with_lookup("doi", "new");
    let mut cmd = LookupCommand::new("BrowZine", "doi", None);
    cmd.state_mut().set_reexecution(ReexecutionPolicy::Overwrite);

    cmd.execute(&first).unwrap();
    assert_eq!(cmd.result().unwrap(), &json!("old"));
    cmd.execute(&second).unwrap();
    assert_eq!(cmd.result().unwrap(), &json!("new"));
}

#[test]
fn test_failed_overwrite_keeps_first_result() {
    let healthy = Catalog::new("Solr");
    let broken = Catalog::new("Solr").failing("connection reset");
    let mut cmd =
        RetrieveCommand::new("Solr", "4", None).with_reexecution(ReexecutionPolicy::Overwrite);

    cmd.execute(&healthy).unwrap();
    let err = cmd.execute(&broken).err().unwrap();

    assert_eq!(err, Error::backend("Solr", "connection reset"));
    assert!(cmd.is_executed());
    assert_eq!(cmd.result().unwrap().ids(), vec!["4"]);
    assert_eq!(broken.calls().len(), 1);
}

#[test]
fn test_with_context_on_every_command() {
    let workset = Context::from("workset");
    assert_eq!(
        RetrieveCommand::new("Solr", "1", None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
    assert_eq!(
        RetrieveBatchCommand::new("Solr", ["1"], None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
    assert_eq!(
        SimilarCommand::new("Solr", "1", None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
    assert_eq!(
        RandomCommand::new("Solr", "x", 3, None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
    assert_eq!(
        GetIdsCommand::new("Solr", "x", None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
    assert_eq!(
        LookupCommand::new("Solr", "x", None)
            .with_context(workset.clone())
            .context(),
        &workset
    );
}

#[test]
fn test_finalize_execution_chains() {
    let mut cmd = LookupCommand::new("BrowZine", "doi", None);
    let executed = cmd.finalize_execution(json!(42)).is_executed();
    assert!(executed);
    assert_eq!(cmd.result().unwrap(), &json!(42));
}
