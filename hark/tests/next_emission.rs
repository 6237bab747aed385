//! Awaiting emissions from async code.

use hark::{EventEmitter, args};
use std::sync::Arc;
use tokio::time::{Duration, sleep};

mod common;
use common::emitter;

#[tokio::test]
async fn test_next_emission_resolves_with_args() {
    let emitter = emitter();
    let next = emitter.next_emission("ready");
    assert_eq!(emitter.listener_count("ready"), 1);

    emitter.emit("ready", args!["payload", 42u32]);

    let args = next.await.expect("emission should deliver args");
    assert_eq!(args.get::<&str>(0), Some(&"payload"));
    assert_eq!(args.get::<u32>(1), Some(&42));
    assert_eq!(emitter.listener_count("ready"), 0);
}

#[tokio::test]
async fn test_next_emission_from_another_task() {
    let emitter: Arc<EventEmitter> = Arc::new(emitter());
    let next = emitter.next_emission("tick");

    let producer = emitter.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(5)).await;
        producer.emit("tick", args![1u8]);
    });

    let args = next.await.expect("tick should arrive");
    assert_eq!(args.get::<u8>(0), Some(&1));
}

#[tokio::test]
async fn test_next_emission_none_when_listener_removed() {
    let emitter = emitter();
    let next = emitter.next_emission("never");

    emitter.remove_all_listeners(None);
    assert!(next.await.is_none());
}
