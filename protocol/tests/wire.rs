use pretty_assertions::assert_eq;
use serde_json::json;
use skiff_protocol::ClientRequest;
use skiff_protocol::JSONRPCMessage;
use skiff_protocol::JSONRPCRequest;
use skiff_protocol::ModelListParams;
use skiff_protocol::ModelListResponse;
use skiff_protocol::RequestId;

#[test]
fn deserialize_model_list_request() {
    // The request shape the webview sends after an endpoint edit settles.
    let raw = r#"{
        "jsonrpc": "2.0",
        "id": 7,
        "method": "model/list",
        "params": { "baseUrl": "https://api.example.com/v1", "apiKey": "sk-1" }
    }"#;

    // First deserialize from the wire into a JSONRPCMessage, as would happen
    // in a real read loop.
    let msg: JSONRPCMessage =
        serde_json::from_str(raw).expect("failed to deserialize JSONRPCMessage");

    let JSONRPCMessage::Request(json_req) = msg else {
        unreachable!()
    };

    let expected_req = JSONRPCRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::Integer(7),
        method: "model/list".into(),
        params: Some(json!({
            "baseUrl": "https://api.example.com/v1",
            "apiKey": "sk-1"
        })),
    };
    assert_eq!(json_req, expected_req);

    // Convert to the strongly-typed ClientRequest.
    let client_req = ClientRequest::try_from(json_req).expect("conversion must succeed");
    let ClientRequest::ListModels { request_id, params } = client_req;
    assert_eq!(request_id, RequestId::Integer(7));
    assert_eq!(
        params,
        ModelListParams {
            base_url: "https://api.example.com/v1".into(),
            api_key: Some("sk-1".into()),
        }
    );
}

#[test]
fn credential_is_optional_on_the_wire() {
    let request = JSONRPCRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::String("r-1".into()),
        method: "model/list".into(),
        params: Some(json!({ "baseUrl": "http://localhost:11434" })),
    };

    let client_req = ClientRequest::try_from(request).expect("conversion must succeed");
    let ClientRequest::ListModels { params, .. } = client_req;
    assert_eq!(params.api_key, None);

    // An absent credential must not serialize as an empty field.
    assert_eq!(
        serde_json::to_value(&params).expect("serialize params"),
        json!({ "baseUrl": "http://localhost:11434" })
    );
}

#[test]
fn unknown_method_fails_conversion() {
    let request = JSONRPCRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::Integer(3),
        method: "model/pull".into(),
        params: None,
    };

    assert!(ClientRequest::try_from(request).is_err());
}

#[test]
fn serialize_model_list_response() {
    let response = ModelListResponse {
        values: vec!["gpt-a".into(), "gpt-b".into()],
    };

    assert_eq!(
        serde_json::to_value(&response).expect("serialize response"),
        json!({ "values": ["gpt-a", "gpt-b"] })
    );
}
