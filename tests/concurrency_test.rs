use rentcar::infrastructure::in_memory::InMemoryVehicleStore;
use rentcar::infrastructure::selection::UniformRandomSelector;
use rust_decimal_macros::dec;
use std::sync::Arc;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_service_shared_across_tasks() {
    let service = Arc::new(common::service_with(
        InMemoryVehicleStore::with_vehicles(common::fleet()),
        UniformRandomSelector::new(),
    ));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let category = common::category(dec!(65.83));
                service
                    .rent(&common::customer(31 + i % 10), &category, 5)
                    .await
            })
        })
        .collect();

    for handle in handles {
        let transaction = handle.await.unwrap().unwrap();
        assert_eq!(transaction.amount, "R$\u{a0}427,90");
    }
}
