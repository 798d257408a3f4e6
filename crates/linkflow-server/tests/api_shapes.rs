//! Response-shape tests — validates that the JSON the server hands out
//! matches what the network-graph frontend expects, using the real
//! ingest/graph/store pipeline rather than hand-built fixtures.

use linkflow_auth::{mint_session_token, UserProfile};
use linkflow_graph::build_graph;
use linkflow_ingest::parse_roster;
use linkflow_store::RosterStore;

const SAMPLE: &str = "\
이름,회사,직급,연락처,이메일,소개,분야
김민준,메디코어,대표,010-2314-5521,mj@medicore.kr,AI 기반 영상 진단 솔루션 개발,의료기기
박도현,서울힐링병원,병원장,010-5120-7783,dh@healing.kr,재활 치료 전문 병원 운영,의료기관
정우진,KV파트너스,심사역,010-4471-6620,wj@kv.kr,AI 헬스케어 스타트업 투자 심사,투자";

/// Members serialize with the camelCase keys the frontend reads:
/// { id, name, company, role, phone, email, description, category, tags, photoUrl }
#[test]
fn member_json_shape() {
    let report = parse_roster(SAMPLE);
    let json = serde_json::to_value(&report.members).unwrap();
    let member = &json[0];

    assert!(member["id"].is_string());
    assert!(member["name"].is_string());
    assert!(member["company"].is_string());
    assert!(member["role"].is_string());
    assert!(member["phone"].is_string());
    assert!(member["email"].is_string());
    assert!(member["description"].is_string());
    assert!(member["category"].is_string());
    assert!(member["tags"].is_array());
    assert!(member["photoUrl"].is_string());
    // snake_case must not leak onto the wire
    assert!(member.get("photo_url").is_none());
}

/// Graph payload matches the force-graph component's contract:
/// { nodes: [{ id, val, color, member, ... }], links: [{ source, target, type, strength }] }
#[test]
fn graph_json_shape() {
    let report = parse_roster(SAMPLE);
    let graph = build_graph(&report.members);
    let json = serde_json::to_value(&graph).unwrap();

    assert!(json["nodes"].is_array());
    assert!(json["links"].is_array());
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);

    let node = &json["nodes"][0];
    assert!(node["id"].is_string());
    assert!(node["val"].is_number());
    assert!(node["color"].is_string());
    assert!(node["member"].is_object());
    assert_eq!(node["member"]["id"], node["id"]);

    for link in json["links"].as_array().unwrap() {
        assert!(link["source"].is_string());
        assert!(link["target"].is_string());
        let kind = link["type"].as_str().unwrap();
        assert!(kind == "category" || kind == "keyword");
        assert!(link["strength"].as_f64().unwrap() > 0.0);
    }
}

/// The stored roster round-trips byte-identically through the JSON file,
/// so GET /api/members always reflects the last POST.
#[test]
fn roster_store_round_trip_preserves_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");

    let report = parse_roster(SAMPLE);
    let store = RosterStore::open(&path);
    store.replace_all(report.members.clone()).unwrap();

    let reopened = RosterStore::open(&path);
    assert_eq!(
        serde_json::to_value(reopened.list()).unwrap(),
        serde_json::to_value(&report.members).unwrap()
    );
}

/// Auth response shape the login page consumes:
/// { customToken, user: { name, email, profileImage }, uid, isNewUser }
///
/// Built from the real profile serialization and token minting, assembled
/// the same way the login handler does.
#[test]
fn auth_response_shape() {
    let profile = UserProfile {
        provider_id: "4210342217".to_string(),
        name: "김민준".to_string(),
        email: "mj@kakao.com".to_string(),
        profile_image: "https://k.kakaocdn.net/img.jpg".to_string(),
    };
    let uid = format!("kakao_{}", profile.provider_id);
    let token = mint_session_token("test-secret", &uid, 1_700_000_000_000);

    let response = serde_json::json!({
        "customToken": token,
        "user": profile,
        "uid": uid,
        "isNewUser": true,
    });

    assert_eq!(response["customToken"].as_str().unwrap().len(), 64);
    assert_eq!(response["user"]["name"], "김민준");
    assert_eq!(response["user"]["profileImage"], "https://k.kakaocdn.net/img.jpg");
    // The provider-internal id must not leak into the user object.
    assert!(response["user"].get("providerId").is_none());
    assert!(response["user"].get("provider_id").is_none());
    assert_eq!(response["uid"], "kakao_4210342217");
    assert!(response["isNewUser"].is_boolean());
}
