//! Superseded and unmounted fetches must never write state.

use crate::common::slow_server;
use crate::common::test_helpers::{services_for, today, ACME_PROJECTS_JSON, ENGINEER_ID, TOKEN};
use projtrack_client_core::controllers::noop_notify;
use projtrack_client_core::{ExpenseType, HomeController, Navigation, Services, SubmitOutcome};
use std::time::Duration;

fn logged_in_home(services: &Services) -> HomeController {
    services
        .sessions
        .set(TOKEN, Some(ENGINEER_ID))
        .expect("set session");
    HomeController::new(
        services.api.clone(),
        services.sessions.clone(),
        today(),
        noop_notify(),
    )
}

#[tokio::test]
async fn newer_company_filter_cancels_stale_projects_fetch() {
    let url = slow_server::spawn("selectedCompanyName=Stalled", ACME_PROJECTS_JSON).await;
    let services = services_for(&url);
    let home = logged_in_home(&services);

    let stale = tokio::spawn({
        let home = home.clone();
        async move { home.set_company_filter("Stalled".to_string()).await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(home.snapshot().loading_projects);

    assert_eq!(home.set_company_filter("Acme".to_string()).await, Navigation::Stay);

    let stale_nav = tokio::time::timeout(Duration::from_secs(5), stale)
        .await
        .expect("stale fetch should end once cancelled")
        .expect("join");
    assert_eq!(stale_nav, Navigation::Stay);

    let state = home.snapshot();
    assert_eq!(state.company_filter, "Acme");
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.projects[0].project_name, "Bridge Retrofit");
    assert!(!state.loading_projects);
}

#[tokio::test]
async fn unmount_cancels_in_flight_mount() {
    let url = slow_server::spawn("GET /", "[]").await;
    let services = services_for(&url);
    let home = logged_in_home(&services);

    let mount = tokio::spawn({
        let home = home.clone();
        async move { home.mount().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    home.unmount();

    let nav = tokio::time::timeout(Duration::from_secs(5), mount)
        .await
        .expect("mount should end once cancelled")
        .expect("join");
    assert_eq!(nav, Navigation::Stay);

    let state = home.snapshot();
    assert!(state.companies.is_empty());
    assert!(state.projects.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_submit_is_busy_while_first_is_in_flight() {
    let url = slow_server::spawn("projectIdMobile", "[]").await;
    let services = services_for(&url);
    let home = logged_in_home(&services);
    home.select_project(Some("Bridge Retrofit".to_string()));
    home.set_expense_type(Some(ExpenseType::Tools));
    home.set_amount("12".to_string());

    let first = tokio::spawn({
        let home = home.clone();
        async move { home.submit_expense().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(home.snapshot().submitting);

    let second = home.clone();
    assert_eq!(second.submit_expense().await, SubmitOutcome::Busy);
    first.abort();
}
