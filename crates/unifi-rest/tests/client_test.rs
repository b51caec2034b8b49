#![allow(clippy::unwrap_used, clippy::float_cmp)]
// Integration tests for `Unifi` against a wiremock controller.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unifi_rest::{Config, Error, Logger, Site, Unifi};

// ── Helpers ─────────────────────────────────────────────────────────

fn config(server: &MockServer, new: bool) -> Config {
    Config::new(
        Url::parse(&server.uri()).unwrap(),
        "admin",
        SecretString::from("secret".to_string()),
    )
    .with_new_firmware(new)
    .with_timeout(Duration::from_secs(5))
}

fn ok(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

async fn mount_session(server: &MockServer, prefix: &str, login_path: &str) {
    Mock::given(method("POST"))
        .and(path(login_path))
        .and(body_json(json!({ "username": "admin", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-CSRF-Token", "token-1")
                .insert_header("Set-Cookie", "unifises=session; Path=/")
                .set_body_json(json!({})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{prefix}/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "ok", "up": true, "server_version": "7.4.162", "uuid": "c0ffee" },
            "data": []
        })))
        .mount(server)
        .await;
}

async fn legacy_session() -> (MockServer, Unifi) {
    let server = MockServer::start().await;
    mount_session(&server, "", "/api/login").await;
    let unifi = Unifi::new(config(&server, false)).await.unwrap();
    (server, unifi)
}

fn default_site(unifi: &Unifi) -> Site {
    Site {
        name: "default".into(),
        desc: "Home".into(),
        site_name: "Home (default)".into(),
        source_name: unifi.config().source_name().to_owned(),
        ..Site::default()
    }
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_legacy_reads_status_and_token() {
    let (_server, unifi) = legacy_session().await;

    assert!(unifi.is_up());
    assert_eq!(unifi.server_version(), "7.4.162");
    assert_eq!(unifi.uuid(), "c0ffee");
    assert_eq!(unifi.csrf_token().as_deref(), Some("token-1"));
    assert!(!unifi.is_new_firmware());
}

#[tokio::test]
async fn test_connect_new_firmware_uses_proxy_prefix() {
    let server = MockServer::start().await;
    mount_session(&server, "/proxy/network", "/api/auth/login").await;

    Mock::given(method("GET"))
        .and(path("/proxy/network/api/stat/sites"))
        .and(header("X-CSRF-Token", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "s1", "name": "default", "desc": "Default" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let unifi = Unifi::new(config(&server, true)).await.unwrap();
    assert!(unifi.is_new_firmware());
    assert_eq!(unifi.server_version(), "7.4.162");

    let sites = unifi.get_sites().await.unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].site_name, "Default (default)");
}

#[tokio::test]
async fn test_login_failure_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.Invalid" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = Unifi::new(config(&server, false)).await;
    match result {
        Err(Error::Authentication { message }) => {
            assert!(message.contains("user: admin"), "{message}");
            assert!(message.contains("status: 400"), "{message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rotated_csrf_token_is_sent_next() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("GET"))
        .and(path("/api/stat/sites"))
        .and(header("X-CSRF-Token", "token-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Updated-CSRF-Token", "token-2")
                .set_body_json(ok(json!([]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    unifi.get_sites().await.unwrap();
    assert_eq!(unifi.csrf_token().as_deref(), Some("token-2"));
}

#[tokio::test]
async fn test_detect_new_firmware() {
    let new = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&new)
        .await;

    let legacy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/manage"))
        .mount(&legacy)
        .await;

    let timeout = Duration::from_secs(5);
    let new_url = Url::parse(&new.uri()).unwrap();
    let legacy_url = Url::parse(&legacy.uri()).unwrap();

    assert!(Unifi::detect_new_firmware(&new_url, false, timeout).await.unwrap());
    assert!(!Unifi::detect_new_firmware(&legacy_url, false, timeout).await.unwrap());
}

// ── Envelope errors ─────────────────────────────────────────────────

#[tokio::test]
async fn test_non_ok_envelope_is_api_error() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("GET"))
        .and(path("/api/stat/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NoPermission" },
            "data": []
        })))
        .mount(&server)
        .await;

    let err = unifi.get_sites().await.unwrap_err();
    assert!(
        matches!(err, Error::Api { ref message } if message == "api.err.NoPermission"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unauthorized_is_invalid_status() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("GET"))
        .and(path("/api/stat/sites"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = unifi.get_sites().await.unwrap_err();
    assert!(matches!(err, Error::InvalidStatus { status: 401, .. }), "got: {err:?}");
    assert!(err.is_auth_expired());
}

// ── Site-scoped fetchers ────────────────────────────────────────────

#[tokio::test]
async fn test_get_sites_labels_and_logs() {
    let server = MockServer::start().await;
    mount_session(&server, "", "/api/login").await;

    Mock::given(method("GET"))
        .and(path("/api/stat/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "s1", "name": "default", "desc": "Home", "num_new_alarms": "3" },
            { "_id": "s2", "name": "x7a1b", "desc": "Office" }
        ]))))
        .mount(&server)
        .await;

    let debug = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&debug);
    let config = config(&server, false).with_debug_log(Logger::new(move |args| {
        sink.lock().unwrap().push(args.to_string());
    }));

    let unifi = Unifi::new(config).await.unwrap();
    let sites = unifi.get_sites().await.unwrap();

    assert_eq!(sites[0].site_name, "Home (default)");
    assert_eq!(sites[1].site_name, "Office (x7a1b)");
    assert_eq!(sites[0].num_new_alarms.val, 3.0);
    assert_eq!(sites[1].source_name, server.uri());
    assert!(
        debug
            .lock()
            .unwrap()
            .iter()
            .any(|line| line == "Found 2 site(s): default,x7a1b")
    );
}

#[tokio::test]
async fn test_get_clients_tags_site() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/sta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "c1", "mac": "11:22:33:44:55:66", "hostname": "laptop", "rx_bytes": "1024", "is_wired": false }
        ]))))
        .mount(&server)
        .await;

    let site = default_site(&unifi);
    let clients = unifi.get_clients(&[site]).await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].hostname, "laptop");
    assert_eq!(clients[0].rx_bytes.val, 1024.0);
    assert_eq!(clients[0].site_name, "Home (default)");
    assert_eq!(clients[0].source_name, server.uri());
}

#[tokio::test]
async fn test_get_devices_splits_and_skips_unknown() {
    let server = MockServer::start().await;
    mount_session(&server, "", "/api/login").await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "d1", "type": "uap", "mac": "aa:00:00:00:00:01", "name": "Lobby AP", "num_sta": 7 },
            { "_id": "d2", "type": "usw", "mac": "aa:00:00:00:00:02", "name": "Core", "state": "1" },
            { "_id": "d3", "type": "ugw", "mac": "aa:00:00:00:00:03" },
            { "_id": "d4", "type": "uxg", "mac": "aa:00:00:00:00:04" }
        ]))))
        .mount(&server)
        .await;

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let config = config(&server, false).with_error_log(Logger::new(move |args| {
        sink.lock().unwrap().push(args.to_string());
    }));
    let unifi = Unifi::new(config).await.unwrap();

    let site = default_site(&unifi);
    let devices = unifi.get_devices(&[site]).await.unwrap();

    assert_eq!(devices.len(), 3);
    assert_eq!(devices.uaps[0].name, "Lobby AP");
    assert_eq!(devices.uaps[0].num_sta.val, 7.0);
    assert_eq!(devices.usws[0].state.txt, "1");
    assert_eq!(devices.usgs[0].mac, "aa:00:00:00:00:03");
    assert!(devices.udms.is_empty());
    assert_eq!(
        *errors.lock().unwrap(),
        vec!["unknown asset type - uxg - skipping".to_string()]
    );
}

#[tokio::test]
async fn test_get_events_posts_window() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/stat/event"))
        .and(header("X-CSRF-Token", "token-1"))
        .and(body_json(json!({ "_limit": 50_000, "within": 2, "_sort": "-time" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "e1", "key": "EVT_WU_Connected", "msg": "User connected", "time": 1_718_000_000_000_i64 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let site = default_site(&unifi);
    let events = unifi.get_events(&[site], 2).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].key, "EVT_WU_Connected");
    assert_eq!(events[0].time.txt, "1718000000000");
    assert_eq!(events[0].site_name, "Home (default)");
}

#[tokio::test]
async fn test_get_ids_posts_millisecond_bounds() {
    let (server, unifi) = legacy_session().await;

    let from = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/s/default/stat/ips/event"))
        .and(body_json(json!({
            "start": from.timestamp_millis(),
            "end": to.timestamp_millis(),
            "_limit": 50_000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "_id": "i1", "key": "EVT_IPS_IpsAlert", "src_port": "443" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let site = default_site(&unifi);
    let ids = unifi.get_ids(&[site], from, to).await.unwrap();

    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].src_port.val, 443.0);
}

#[tokio::test]
async fn test_get_anomalies_flattens_timestamps() {
    let (server, unifi) = legacy_session().await;

    let from = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/anomalies"))
        .and(query_param("scale", "hourly"))
        .and(query_param("start", from.timestamp_millis().to_string()))
        .and(query_param("end", to.timestamp_millis().to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            {
                "mac": "aa:bb:cc:dd:ee:ff",
                "anomalies": [
                    { "anomaly": "USER_DNS_TIMEOUT", "timestamps": [1_717_200_000_000_i64, 1_717_203_600_000_i64] }
                ]
            }
        ]))))
        .mount(&server)
        .await;

    let site = default_site(&unifi);
    let anomalies = unifi.get_anomalies(&[site], from, to).await.unwrap();

    assert_eq!(anomalies.len(), 2);
    assert_eq!(anomalies[1].anomaly, "USER_DNS_TIMEOUT");
    assert_eq!(anomalies[1].device_mac, "aa:bb:cc:dd:ee:ff");
    assert_eq!(anomalies[1].datetime.timestamp_millis(), 1_717_203_600_000);
    assert_eq!(anomalies[0].site_name, "Home (default)");
}

#[tokio::test]
async fn test_get_site_dpi_posts_by_app() {
    let (server, unifi) = legacy_session().await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/stat/sitedpi"))
        .and(body_json(json!({ "type": "by_app" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "by_app": [ { "app": 5, "cat": 3, "rx_bytes": 100, "tx_bytes": "200" } ] }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let site = default_site(&unifi);
    let tables = unifi.get_site_dpi(&[site]).await.unwrap();

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].by_app[0].tx_bytes.val, 200.0);
    assert_eq!(tables[0].site_name, "Home (default)");
}
