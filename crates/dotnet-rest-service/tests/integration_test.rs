use dotnet_rest_service::config::StoreConfig;
use dotnet_rest_service::dotnet_rest_actor::DotnetRestError;
use dotnet_rest_service::lifecycle::DotnetRestSystem;
use dotnet_rest_service::model::{DotnetRestDto, GetDotnetRestsRequest};
use dotnet_rest_service::service::DotnetRestService;
use std::collections::HashSet;

fn system() -> DotnetRestSystem {
    DotnetRestSystem::new(&StoreConfig { buffer_size: 64 })
}

async fn seed(service: &impl DotnetRestService, names: &[&str]) -> Vec<String> {
    let mut ids = Vec::new();
    for name in names {
        let created = service
            .create_dotnet_rest(DotnetRestDto::new(*name))
            .await
            .expect("Failed to create");
        ids.push(created.dotnet_rest.id.expect("id assigned"));
    }
    ids
}

fn names(page: &[DotnetRestDto]) -> Vec<&str> {
    page.iter().map(|d| d.name.as_str()).collect()
}

#[tokio::test]
async fn test_create_then_get() {
    let system = system();
    let client = &system.client;

    let created = client
        .create_dotnet_rest(DotnetRestDto::new("alpha"))
        .await
        .unwrap();
    let id = created.dotnet_rest.id.clone().unwrap();
    assert!(!id.is_empty());

    let fetched = client.get_dotnet_rest(&id).await.unwrap();
    assert_eq!(fetched.dotnet_rest, created.dotnet_rest);
    assert_eq!(fetched.dotnet_rest.name, "alpha");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_generated_ids_are_unique_uuids() {
    let system = system();
    let ids = seed(&system.client, &["a", "b"]).await;

    assert_ne!(ids[0], ids[1]);
    for id in &ids {
        assert!(uuid::Uuid::parse_str(id).is_ok(), "{id} is not a UUID");
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_with_existing_id_overwrites_in_place() {
    let system = system();
    let client = &system.client;
    let ids = seed(client, &["first", "second", "third"]).await;

    let replaced = client
        .create_dotnet_rest(DotnetRestDto::with_id(ids[1].clone(), "second v2"))
        .await
        .unwrap();
    assert_eq!(replaced.dotnet_rest.id.as_deref(), Some(ids[1].as_str()));

    let page = client
        .get_dotnet_rests(GetDotnetRestsRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total_elements, 3);
    assert_eq!(names(&page.dotnet_rests), vec!["first", "second v2", "third"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_with_caller_id_uses_it() {
    let system = system();
    let created = system
        .client
        .create_dotnet_rest(DotnetRestDto::with_id("my-key", "named"))
        .await
        .unwrap();
    assert_eq!(created.dotnet_rest.id.as_deref(), Some("my-key"));
    assert_eq!(
        system.client.get_dotnet_rest("my-key").await.unwrap().dotnet_rest.name,
        "named"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_is_full_replace() {
    let system = system();
    let client = &system.client;
    let id = seed(client, &["before"]).await.remove(0);

    let updated = client
        .update_dotnet_rest(DotnetRestDto::with_id(id.clone(), "after"))
        .await
        .unwrap();
    assert_eq!(updated.dotnet_rest, DotnetRestDto::with_id(id.clone(), "after"));

    // Fields missing from the update are reset, not merged.
    let blanked = serde_json::from_value::<DotnetRestDto>(serde_json::json!({ "id": id }))
        .unwrap();
    client.update_dotnet_rest(blanked).await.unwrap();
    assert_eq!(client.get_dotnet_rest(&id).await.unwrap().dotnet_rest.name, "");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let system = system();
    let client = &system.client;
    let id = seed(client, &["doomed"]).await.remove(0);

    assert!(client.delete_dotnet_rest(&id).await.unwrap().deleted);
    assert_eq!(
        client.delete_dotnet_rest(&id).await.unwrap_err(),
        DotnetRestError::not_found(id.clone())
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_not_found_contract() {
    let system = system();
    let client = &system.client;

    assert!(client.get_dotnet_rest("never").await.unwrap_err().is_not_found());
    assert!(client
        .update_dotnet_rest(DotnetRestDto::with_id("never", "x"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(client.delete_dotnet_rest("never").await.unwrap_err().is_not_found());

    let err = client
        .update_dotnet_rest(DotnetRestDto::new("no id"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "DotnetRest not found: null");

    let id = seed(client, &["gone"]).await.remove(0);
    client.delete_dotnet_rest(&id).await.unwrap();
    assert!(client.get_dotnet_rest(&id).await.unwrap_err().is_not_found());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_pagination_arithmetic() {
    let system = system();
    let client = &system.client;
    seed(client, &["1", "2", "3", "4", "5", "6", "7"]).await;

    let page1 = client
        .get_dotnet_rests(GetDotnetRestsRequest::new(1, 4))
        .await
        .unwrap();
    assert_eq!(names(&page1.dotnet_rests), vec!["1", "2", "3", "4"]);
    assert_eq!(page1.total_pages, 2);
    assert_eq!(page1.total_elements, 7);
    assert!(page1.has_next);
    assert_eq!(page1.next_page, 2);
    assert!(!page1.has_previous);

    let page2 = client
        .get_dotnet_rests(GetDotnetRestsRequest::new(2, 4))
        .await
        .unwrap();
    assert_eq!(names(&page2.dotnet_rests), vec!["5", "6", "7"]);
    assert!(!page2.has_next);
    assert!(page2.has_previous);
    assert_eq!(page2.previous_page, 1);

    let page3 = client
        .get_dotnet_rests(GetDotnetRestsRequest::new(3, 4))
        .await
        .unwrap();
    assert!(page3.dotnet_rests.is_empty());
    assert_eq!(page3.total_pages, 2);
    assert_eq!(page3.total_elements, 7);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_non_positive_bounds_fall_back_to_defaults() {
    let system = system();
    let client = &system.client;
    let all: Vec<String> = (0..15).map(|i| format!("n{i}")).collect();
    let refs: Vec<&str> = all.iter().map(String::as_str).collect();
    seed(client, &refs).await;

    let page = client
        .get_dotnet_rests(GetDotnetRestsRequest::new(0, 0))
        .await
        .unwrap();
    assert_eq!(page.dotnet_rests.len(), 10);
    assert_eq!(page.total_pages, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let system = system();
    let page = system
        .client
        .get_dotnet_rests(GetDotnetRestsRequest::default())
        .await
        .unwrap();
    assert!(page.dotnet_rests.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_elements, 0);
    assert!(!page.has_next && !page.has_previous);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let system = system();
    let n = 100;

    let handles: Vec<_> = (0..n)
        .map(|i| {
            let client = system.client.clone();
            tokio::spawn(async move {
                client
                    .create_dotnet_rest(DotnetRestDto::new(format!("item-{i}")))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = system
        .client
        .get_dotnet_rests(GetDotnetRestsRequest::new(1, n))
        .await
        .unwrap();
    assert_eq!(page.dotnet_rests.len(), n as usize);
    assert_eq!(page.total_elements, n as u64);
    let ids: HashSet<_> = page.dotnet_rests.iter().map(|d| d.id.clone()).collect();
    assert_eq!(ids.len(), n as usize);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mixed_operations_keep_counts_exact() {
    let system = system();
    let keep = seed(&system.client, &["k1", "k2", "k3", "k4", "k5"]).await;
    let doomed = seed(&system.client, &["d1", "d2", "d3", "d4", "d5"]).await;

    let mut handles = Vec::new();
    for id in doomed {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client.delete_dotnet_rest(&id).await.map(|_| ())
        }));
    }
    for id in keep.clone() {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client
                .update_dotnet_rest(DotnetRestDto::with_id(id, "updated"))
                .await
                .map(|_| ())
        }));
    }
    for _ in 0..5 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client
                .get_dotnet_rests(GetDotnetRestsRequest::new(1, 100))
                .await
                .map(|page| assert!(page.total_elements as usize == page.dotnet_rests.len()))
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = system
        .client
        .get_dotnet_rests(GetDotnetRestsRequest::new(1, 100))
        .await
        .unwrap();
    assert_eq!(page.total_elements, 5);
    assert!(page.dotnet_rests.iter().all(|d| d.name == "updated"));
    let ids: Vec<_> = page.dotnet_rests.iter().filter_map(|d| d.id.clone()).collect();
    assert_eq!(ids, keep);

    system.shutdown().await.unwrap();
}
