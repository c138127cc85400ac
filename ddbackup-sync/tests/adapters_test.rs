mod common;

use common::*;
use ddbackup_http::{Dashboard, DashboardSummary, Downtime};
use ddbackup_sync::{
    ConfigElement, DashboardAdapter, DowntimeAdapter, MonitorAdapter, Resource, ResourceAdapter,
    SyncError, NO_ID,
};
use mockall::predicate::eq;
use std::sync::Arc;

#[tokio::test]
async fn test_monitor_get_all_names_elements_after_monitors() {
    let mut api = MockMonitors::new();
    api.expect_list_monitors()
        .times(1)
        .returning(|| Ok(vec![monitor(Some(1), "cpu"), monitor(Some(2), "disk")]));

    let adapter = MonitorAdapter::new(Arc::new(api));
    let set = adapter.get_all().await.unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.elements[0].name(), "cpu");
    assert_eq!(set.elements[1].id(), 2);
    assert_eq!(set.payloads[1], Resource::Monitor(monitor(Some(2), "disk")));
}

#[tokio::test]
async fn test_monitor_get_by_name_keeps_exact_matches() {
    let mut api = MockMonitors::new();
    api.expect_find_monitors_by_name()
        .withf(|name| name == "cpu")
        .times(1)
        .returning(|_| {
            Ok(vec![
                monitor(Some(1), "cpu"),
                monitor(Some(2), "cpu high"),
                monitor(Some(3), "gpu cpu"),
            ])
        });

    let adapter = MonitorAdapter::new(Arc::new(api));
    let found = adapter.get_by_name("cpu").await.unwrap();

    assert_eq!(found, vec![Resource::Monitor(monitor(Some(1), "cpu"))]);
}

#[tokio::test]
async fn test_monitor_get_by_id_not_found() {
    let mut api = MockMonitors::new();
    api.expect_get_monitor()
        .with(eq(404))
        .returning(|_| Ok(None));

    let adapter = MonitorAdapter::new(Arc::new(api));
    assert!(adapter.get_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_monitor_create_strips_local_id() {
    let mut api = MockMonitors::new();
    api.expect_create_monitor()
        .withf(|m| m.id.is_none() && m.name.as_deref() == Some("cpu"))
        .times(1)
        .returning(|m| {
            Ok(ddbackup_http::Monitor {
                id: Some(501),
                ..m.clone()
            })
        });

    let adapter = MonitorAdapter::new(Arc::new(api));
    let element = ConfigElement::new(
        Some("cpu".to_string()),
        Some(42),
        Resource::Monitor(monitor(Some(42), "cpu")),
    );

    let created = adapter.create(&element).await.unwrap();
    let Resource::Monitor(created) = created else {
        panic!("expected a monitor");
    };
    assert_eq!(created.id, Some(501));
}

#[tokio::test]
async fn test_create_rejects_foreign_payload() {
    let adapter = MonitorAdapter::new(Arc::new(MockMonitors::new()));
    let element = ConfigElement::new(
        Some("window".to_string()),
        None,
        Resource::Downtime(Downtime::default()),
    );

    let err = adapter.create(&element).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::UnexpectedPayload {
            kind: "monitors",
            found: "downtime"
        }
    ));
}

#[test]
fn test_monitor_decode_file() {
    let adapter = MonitorAdapter::new(Arc::new(MockMonitors::new()));
    let source = r#"
- name: cpu
  id: 12
  delegate:
    id: 12
    name: cpu
    type: metric alert
    query: avg(last_5m):avg:system.cpu.user{*} > 90
    options:
      notify_no_data: true
- name: fresh
  delegate:
    name: fresh
    type: metric alert
"#;

    let elements = adapter.decode_file(source).unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].id(), 12);
    assert_eq!(elements[1].name(), "fresh");
    assert_eq!(elements[1].id(), NO_ID);

    let Resource::Monitor(first) = elements[0].delegate() else {
        panic!("expected a monitor");
    };
    assert_eq!(first.monitor_type.as_deref(), Some("metric alert"));
}

#[test]
fn test_decode_file_reports_malformed_yaml() {
    let adapter = MonitorAdapter::new(Arc::new(MockMonitors::new()));
    let err = adapter.decode_file("- name: [unterminated").unwrap_err();
    assert!(matches!(err, SyncError::Decode { kind: "monitors", .. }));
}

#[tokio::test]
async fn test_dashboard_get_all_fetches_each_dashboard() {
    let mut api = MockDashboards::new();
    api.expect_list_dashboards().times(1).returning(|| {
        Ok(vec![
            DashboardSummary {
                id: Some(10),
                title: Some("Overview".to_string()),
                description: None,
            },
            DashboardSummary {
                id: Some(11),
                title: Some("Hosts".to_string()),
                description: None,
            },
        ])
    });
    api.expect_get_dashboard().times(2).returning(|id| {
        Ok(Some(Dashboard {
            id: Some(id),
            title: Some(format!("dash-{}", id)),
            graphs: vec![serde_json::json!({"title": "cpu"})],
            ..Default::default()
        }))
    });

    let adapter = DashboardAdapter::new(Arc::new(api));
    let set = adapter.get_all().await.unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.elements[0].name(), "dash-10");
    assert_eq!(set.elements[1].id(), 11);
}

#[tokio::test]
async fn test_dashboard_get_all_fails_when_a_detail_fetch_fails() {
    let mut api = MockDashboards::new();
    api.expect_list_dashboards().returning(|| {
        Ok(vec![
            DashboardSummary {
                id: Some(10),
                ..Default::default()
            },
            DashboardSummary {
                id: Some(11),
                ..Default::default()
            },
        ])
    });
    api.expect_get_dashboard()
        .with(eq(10))
        .returning(|id| {
            Ok(Some(Dashboard {
                id: Some(id),
                ..Default::default()
            }))
        });
    api.expect_get_dashboard()
        .with(eq(11))
        .returning(|_| Err(rejected(500)));

    let adapter = DashboardAdapter::new(Arc::new(api));
    let err = adapter.get_all().await.unwrap_err();
    assert!(matches!(err, SyncError::Remote(_)));
}

#[tokio::test]
async fn test_dashboard_and_downtime_have_no_name_lookup() {
    let dashboards = DashboardAdapter::new(Arc::new(MockDashboards::new()));
    let downtimes = DowntimeAdapter::new(Arc::new(MockDowntimes::new()));

    assert!(dashboards.get_by_name("Overview").await.unwrap().is_empty());
    assert!(downtimes.get_by_name("maintenance").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_downtime_named_after_message() {
    let mut api = MockDowntimes::new();
    api.expect_list_downtimes().returning(|| {
        Ok(vec![Downtime {
            id: Some(5),
            message: Some("nightly maintenance".to_string()),
            scope: vec!["env:prod".to_string()],
            ..Default::default()
        }])
    });

    let adapter = DowntimeAdapter::new(Arc::new(api));
    let set = adapter.get_all().await.unwrap();

    assert_eq!(set.elements[0].name(), "nightly maintenance");
    assert_eq!(set.elements[0].id(), 5);
    assert_eq!(adapter.name(), "downtimes");
}
