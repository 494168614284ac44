mod common;

use common::{FakeStore, ManualTimer};
use halftone_frontend::contact::{ContactSubmissionFlow, Draft, Field, SubmissionStatus, SubmitOutcome};
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .,!?'-]{0,40}"
}

fn email() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._+]{0,15}", "[a-z][a-z0-9-]{0,15}", "[a-z]{2,6}")
        .prop_map(|(local, host, tld)| format!("{local}@{host}.{tld}"))
}

proptest! {
    #[test]
    fn every_valid_draft_is_inserted_exactly_once(name in text(), email in email(), details in text()) {
        let store = FakeStore::succeeding();
        let flow = ContactSubmissionFlow::new(store.clone(), ManualTimer::default());
        flow.update_field(Field::FullName, name.clone());
        flow.update_field(Field::Email, email.clone());
        flow.update_field(Field::Details, details.clone());

        let outcome = block_on(flow.submit());

        prop_assert!(matches!(outcome, SubmitOutcome::Sent));
        prop_assert_eq!(store.call_count(), 1);
        let record = store.last_record();
        prop_assert_eq!(record["full_name"].as_str(), Some(name.as_str()));
        prop_assert_eq!(record["email"].as_str(), Some(email.as_str()));
        prop_assert_eq!(record["details"].as_str(), Some(details.as_str()));
    }

    #[test]
    fn failure_never_loses_what_was_typed(name in text(), email in email(), details in text()) {
        let store = FakeStore::failing("permission denied");
        let flow = ContactSubmissionFlow::new(store.clone(), ManualTimer::default());
        flow.update_field(Field::FullName, name.clone());
        flow.update_field(Field::Email, email.clone());
        flow.update_field(Field::Details, details.clone());

        block_on(flow.submit());

        prop_assert_eq!(flow.draft(), Draft::new(name, email, details));
        prop_assert_eq!(flow.status(), SubmissionStatus::Error("permission denied".to_string()));
    }
}
