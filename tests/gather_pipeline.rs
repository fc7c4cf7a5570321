//! End-to-end run of both invocations: a gather against a fake platform node, then batch reads
//! of the artifact it persisted, decoding every printed value the way the consumer would.

use alloy_primitives::U256;
use alloy_sol_types::SolValue;
use chrono::Utc;
use serde_json::json;

use node_gatherer::{
    encode_status_tuple, encode_string_array, gather_node_list, read_batch, FilterParams,
    InvalidOffsetError, NodeListStore, PlatformNodeHttp, WeiNewtype,
};

const ELIGIBLE_NODE_IDS: [&str; 2] = [
    "NodeID-7Xhw2mDxuDS44j42TCB6U5579esbSt3Lg",
    "NodeID-MFrZFVCXPv5iCn6M9K6XduxGTYp891xXZ",
];

fn current_validators_body() -> String {
    let end_time = (Utc::now().timestamp() + 10_000_000).to_string();
    json!({
        "jsonrpc": "2.0",
        "result": {
            "validators": [
                {
                    "nodeID": ELIGIBLE_NODE_IDS[0],
                    "delegationFee": "2.0000",
                    "endTime": end_time,
                    "stakeAmount": "2000000000000",
                    "delegators": [
                        { "stakeAmount": "100000000000" }
                    ]
                },
                {
                    // Fee above the 2% cap, filtered out.
                    "nodeID": "NodeID-GWPcbFJZFfZreETSoWjPimr846mXEKCtu",
                    "delegationFee": "6.2500",
                    "endTime": end_time,
                    "stakeAmount": "2000000000000"
                },
                {
                    "nodeID": ELIGIBLE_NODE_IDS[1],
                    "delegationFee": "0.5000",
                    "endTime": end_time,
                    "stakeAmount": "1000000000000"
                }
            ]
        },
        "id": 1
    })
    .to_string()
}

fn params() -> FilterParams {
    // Two week stake period, 25 AVAX minimum stake in wei.
    FilterParams::new(1209600, WeiNewtype(25_000_000_000_000_000_000)).unwrap()
}

#[tokio::test]
async fn gather_then_read_batches_test() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ext/bc/P")
        .with_status(200)
        .with_body(current_validators_body())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = NodeListStore::new_with_path(dir.path().join("node-output.json"));
    let platform_node = PlatformNodeHttp::new_with_url(&server.url());

    // Gather run: the status tuple reports two eligible nodes.
    let encoded = gather_node_list(&platform_node, &store, &params())
        .await
        .unwrap();
    let (success, count) = <(bool, U256)>::abi_decode_params(&encoded).unwrap();
    assert!(success);
    assert_eq!(count, U256::from(2));

    // Batch-read run: page through the persisted list one node at a time.
    let nodes = store.read().unwrap();
    assert_eq!(nodes, ELIGIBLE_NODE_IDS);

    for (offset, expected) in ELIGIBLE_NODE_IDS.iter().enumerate() {
        let batch = read_batch(&nodes, offset, 1).unwrap();
        let decoded = Vec::<String>::abi_decode(&encode_string_array(batch)).unwrap();
        assert_eq!(decoded, vec![expected.to_string()]);
    }

    // A single oversized batch clips to the end of the list.
    let batch = read_batch(&nodes, 0, 10).unwrap();
    let decoded = Vec::<String>::abi_decode(&encode_string_array(batch)).unwrap();
    assert_eq!(decoded, ELIGIBLE_NODE_IDS);

    // And an offset past the end is rejected, not clipped.
    assert_eq!(
        read_batch(&nodes, 5, 10),
        Err(InvalidOffsetError {
            start_offset: 5,
            len: 2
        })
    );
}

#[tokio::test]
async fn unreachable_platform_node_reports_failure_tuple_test() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ext/bc/P")
        .with_status(502)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = NodeListStore::new_with_path(dir.path().join("node-output.json"));
    let platform_node = PlatformNodeHttp::new_with_url(&server.url());

    let encoded = gather_node_list(&platform_node, &store, &params())
        .await
        .unwrap();

    assert_eq!(encoded, encode_status_tuple(false, 0));
    assert!(store.read().is_err());
}
