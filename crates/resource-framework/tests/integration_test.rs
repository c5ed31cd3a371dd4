use async_trait::async_trait;
use resource_framework::{ActorEntity, FrameworkError, PageRequest, ResourceActor, ResourceClient};
use std::collections::HashSet;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
}

#[derive(Debug)]
struct TicketCreate {
    id: Option<u32>,
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct TicketError(String);

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;
    const KIND: &'static str = "Ticket";

    fn requested_id(params: &TicketCreate) -> Option<u32> {
        params.id
    }

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
        })
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if update.title.is_empty() {
            return Err(TicketError("title must not be empty".into()));
        }
        self.title = update.title;
        Ok(())
    }
}

fn start() -> ResourceClient<Ticket> {
    let mut next = 0;
    let (actor, client) = ResourceActor::new(16, move || {
        next += 1;
        next
    });
    tokio::spawn(actor.run(()));
    client
}

fn new_ticket(title: &str) -> TicketCreate {
    TicketCreate {
        id: None,
        title: title.into(),
    }
}

fn titles(items: &[Ticket]) -> Vec<&str> {
    items.iter().map(|t| t.title.as_str()).collect()
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = start();

    // 1. Create
    let created = client.create(new_ticket("Alpha")).await.unwrap();
    assert_eq!(created.id, 1);

    // 2. Get
    let fetched = client.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    // 3. Update
    let updated = client
        .update(
            created.id,
            TicketUpdate {
                title: "Beta".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Beta");
    assert_eq!(client.get(created.id).await.unwrap().title, "Beta");

    // 4. Delete
    assert!(client.delete(created.id).await.unwrap());
    let err = client.get(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let client = start();

    let get = client.get(42).await.unwrap_err();
    assert!(matches!(&get, FrameworkError::NotFound { kind: "Ticket", id } if id == "42"));

    let update = client
        .update(42, TicketUpdate { title: "x".into() })
        .await
        .unwrap_err();
    assert!(update.is_not_found());

    let delete = client.delete(42).await.unwrap_err();
    assert!(delete.is_not_found());
}

#[tokio::test]
async fn test_second_delete_fails() {
    let client = start();
    let created = client.create(new_ticket("once")).await.unwrap();

    assert!(client.delete(created.id).await.unwrap());
    assert!(client.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_requested_id_upserts_in_place() {
    let client = start();
    client.create(new_ticket("first")).await.unwrap();
    client.create(new_ticket("second")).await.unwrap();

    let replaced = client
        .create(TicketCreate {
            id: Some(1),
            title: "first again".into(),
        })
        .await
        .unwrap();
    assert_eq!(replaced.id, 1);

    let page = client.list(PageRequest::default()).await.unwrap();
    assert_eq!(page.total_elements, 2);
    assert_eq!(titles(&page.items), vec!["first again", "second"]);
}

#[tokio::test]
async fn test_generated_ids_skip_requested_ones() {
    let client = start();
    client
        .create(TicketCreate {
            id: Some(1),
            title: "claimed".into(),
        })
        .await
        .unwrap();

    let generated = client.create(new_ticket("fresh")).await.unwrap();
    assert_ne!(generated.id, 1);
    assert_eq!(client.get(1).await.unwrap().title, "claimed");
}

#[tokio::test]
async fn test_failed_update_leaves_value_untouched() {
    let client = start();
    let created = client.create(new_ticket("keep")).await.unwrap();

    let err = client
        .update(created.id, TicketUpdate { title: "".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert_eq!(client.get(created.id).await.unwrap().title, "keep");
}

#[tokio::test]
async fn test_list_pages_in_insertion_order() {
    let client = start();
    for title in ["g", "a", "f", "b", "e", "c", "d"] {
        client.create(new_ticket(title)).await.unwrap();
    }

    let first = client.list(PageRequest::new(1, 4)).await.unwrap();
    assert_eq!(titles(&first.items), vec!["g", "a", "f", "b"]);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.total_elements, 7);
    assert!(first.has_next);
    assert!(!first.has_previous);

    let second = client.list(PageRequest::new(2, 4)).await.unwrap();
    assert_eq!(titles(&second.items), vec!["e", "c", "d"]);
    assert!(!second.has_next);
    assert_eq!(second.previous_page, 1);

    let third = client.list(PageRequest::new(3, 4)).await.unwrap();
    assert!(third.items.is_empty());
    assert_eq!(third.total_pages, 2);
}

#[tokio::test]
async fn test_list_normalizes_non_positive_bounds() {
    let client = start();
    for i in 0..12 {
        client.create(new_ticket(&format!("t{i}"))).await.unwrap();
    }

    let page = client.list(PageRequest::new(0, -5)).await.unwrap();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.next_page, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_listed() {
    let client = start();
    let n = 200;

    let handles: Vec<_> = (0..n)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.create(new_ticket(&format!("c{i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = client.list(PageRequest::new(1, n)).await.unwrap();
    assert_eq!(page.total_elements, n as u64);
    let ids: HashSet<u32> = page.items.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), n as usize);
}

#[tokio::test]
async fn test_client_fails_after_actor_stops() {
    let (actor, client) = ResourceActor::<Ticket>::new(4, || 1);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
