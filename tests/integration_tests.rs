use serde::{Deserialize, Serialize};
use serde_json::json;
use web_common::{ApiResponse, CommonStatus, CoreError, RespStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

fn sample_user() -> User {
    User {
        id: 7,
        name: "张三".to_string(),
    }
}

#[test]
fn test_default_envelope() {
    let resp: ApiResponse<User> = ApiResponse::new();
    assert_eq!(resp.code(), 0);
    assert_eq!(resp.msg(), "ok");
    assert!(resp.data().is_none());
    assert_eq!(resp, ApiResponse::default());
}

#[test]
fn test_with_data_keeps_default_status() {
    let resp = ApiResponse::with_data(sample_user());
    assert_eq!(resp.code(), 0);
    assert_eq!(resp.msg(), "ok");
    assert_eq!(resp.data(), Some(&sample_user()));
    assert_eq!(ApiResponse::ok(sample_user()), resp);
}

#[test]
fn test_from_status() {
    let resp: ApiResponse<User> = ApiResponse::from_status(&CommonStatus::NotFound);
    assert_eq!(resp.code(), 404);
    assert_eq!(resp.msg(), "not found");
    assert!(resp.data().is_none());

    // 元组形式的状态
    let resp: ApiResponse<()> = ApiResponse::error(&(404, "not found"));
    assert_eq!(resp.code(), 404);
    assert_eq!(resp.msg(), "not found");
}

#[test]
fn test_raw_and_full_constructors() {
    let resp: ApiResponse<User> = ApiResponse::with_status(1, "fail");
    assert_eq!((resp.code(), resp.msg()), (1, "fail"));
    assert!(resp.data().is_none());

    let resp = ApiResponse::full(200, "created", sample_user());
    assert_eq!(resp.code(), 200);
    assert_eq!(resp.msg(), "created");
    assert_eq!(resp.into_data(), Some(sample_user()));
}

#[test]
fn test_is_ok_and_is_success_agree() {
    for code in [0, 1, -1, 200, 404, i32::MAX, i32::MIN] {
        let resp: ApiResponse<()> = ApiResponse::with_status(code, "x");
        assert_eq!(resp.is_ok(), code == 0, "code = {}", code);
        assert_eq!(resp.is_success(), resp.is_ok(), "code = {}", code);
    }
}

#[test]
fn test_created_scenario_wire_format() {
    let resp = ApiResponse::full(200, "created", json!({ "id": 7 }));
    let encoded = serde_json::to_string(&resp).unwrap();
    assert_eq!(encoded, r#"{"code":200,"msg":"created","data":{"id":7}}"#);
}

#[test]
fn test_predicates_not_serialized() {
    let resp = ApiResponse::with_data(sample_user());
    let value = serde_json::to_value(&resp).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["code", "data", "msg"]);
    assert!(!object.contains_key("ok"));
    assert!(!object.contains_key("success"));
}

#[test]
fn test_absent_data_is_null() {
    let resp: ApiResponse<User> = ApiResponse::from_status(&CommonStatus::Forbidden);
    assert_eq!(
        serde_json::to_string(&resp).unwrap(),
        r#"{"code":403,"msg":"forbidden","data":null}"#
    );
}

#[test]
fn test_set_status_keeps_data() {
    let mut resp = ApiResponse::with_data(sample_user());
    resp.set_status(&(500, "internal error"));

    assert_eq!(resp.code(), 500);
    assert_eq!(resp.msg(), "internal error");
    assert_eq!(resp.data(), Some(&sample_user()));
    assert!(!resp.is_success());

    resp.set_status(&CommonStatus::Ok);
    assert!(resp.is_ok());
    assert_eq!(resp.data(), Some(&sample_user()));
}

#[test]
fn test_set_status_raw_and_field_setters() {
    let mut resp: ApiResponse<Vec<u8>> = ApiResponse::new();
    resp.set_status_raw(10001, "库存不足");
    assert_eq!((resp.code(), resp.msg()), (10001, "库存不足"));

    resp.set_code(2);
    resp.set_msg("two");
    resp.set_data(vec![1, 2]);
    assert_eq!(resp.into_parts(), (2, "two".to_string(), Some(vec![1, 2])));
}

#[test]
fn test_data_mutation() {
    let mut resp = ApiResponse::with_data(vec![1, 2, 3]);
    if let Some(items) = resp.data_mut() {
        items.push(4);
    }
    assert_eq!(resp.data(), Some(&vec![1, 2, 3, 4]));

    assert_eq!(resp.take_data(), Some(vec![1, 2, 3, 4]));
    assert!(resp.data().is_none());

    resp.set_data(vec![9]);
    resp.clear_data();
    assert!(resp.data().is_none());
    assert!(resp.is_ok());
}

#[test]
fn test_map_keeps_status() {
    let resp = ApiResponse::full(3, "partial", sample_user()).map(|user| user.id);
    assert_eq!(resp.code(), 3);
    assert_eq!(resp.msg(), "partial");
    assert_eq!(resp.data(), Some(&7));
}

#[test]
fn test_from_result() {
    let ok: Result<User, CoreError> = Ok(sample_user());
    let resp: ApiResponse<User> = ok.into();
    assert!(resp.is_ok());
    assert_eq!(resp.data(), Some(&sample_user()));

    let err: Result<User, CoreError> = Err(CoreError::NotFound("用户不存在".to_string()));
    let resp: ApiResponse<User> = err.into();
    assert_eq!(resp.code(), 404);
    assert_eq!(resp.msg(), "用户不存在");
    assert!(resp.data().is_none());
}

#[test]
fn test_envelope_seeds_another_envelope() {
    let upstream: ApiResponse<String> = ApiResponse::with_status(409, "conflict");
    let resp: ApiResponse<User> = ApiResponse::from_status(&upstream);
    assert_eq!(resp.code(), upstream.code());
    assert_eq!(resp.msg(), upstream.msg());
    assert!(!RespStatus::is_ok(&upstream));
}

#[test]
fn test_decode_defaults_and_unknown_fields() {
    let resp: ApiResponse<User> = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, ApiResponse::new());

    let resp: ApiResponse<User> =
        serde_json::from_str(r#"{"code":0,"msg":"ok","data":null,"ok":true,"success":true}"#)
            .unwrap();
    assert_eq!(resp, ApiResponse::new());

    let resp: ApiResponse<User> =
        serde_json::from_str(r#"{"code":200,"msg":"created","data":{"id":7,"name":"张三"}}"#)
            .unwrap();
    assert_eq!(resp, ApiResponse::full(200, "created", sample_user()));
}

#[test]
fn test_encode_decode() {
    let resp = ApiResponse::full(-1, "负数状态码", sample_user());
    let encoded = serde_json::to_string(&resp).unwrap();
    let decoded: ApiResponse<User> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, resp);
}
