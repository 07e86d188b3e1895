//! Integration tests for the REST repositories against a local store emulation

use actix_web::{web, App, HttpResponse, HttpServer};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Mutex;

use rf_core::domain::entities::{Availability, NewProperty, ProfileUpdate, Role};
use rf_core::errors::DomainError;
use rf_core::repositories::{AppointmentRepository, PropertyRepository, UserRepository};
use rf_infra::{RestAppointmentRepository, RestPropertyRepository, RestUserRepository, StoreClient};
use rf_shared::{StoreBackend, StoreConfig};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = if std::env::var("TEST_LOG").is_ok() { "debug" } else { "off" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

struct StoreState {
    users: Mutex<Vec<Value>>,
    properties: Mutex<Vec<Value>>,
}

fn user_doc(id: i64, role: &str, name: &str) -> Value {
    json!({
        "id": id,
        "role": role,
        "name": name,
        "email": format!("{}{}@rentify.com", role, id),
        "phone": format!("12345678{:02}", id - 1),
        "password": format!("{}123", role),
        "verified": false
    })
}

fn property_doc(id: i64, owner_id: i64, city: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Listing {}", id),
        "description": "",
        "city": city,
        "type": "Condo",
        "price": 1500,
        "images": [],
        "ownerId": owner_id,
        "highlight": false,
        "datePosted": "2025-07-01",
        "verified": false,
        "availability": "Available"
    })
}

fn matches_query(doc: &Value, query: &HashMap<String, String>) -> bool {
    query.iter().all(|(key, expected)| match doc.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(other) => &other.to_string() == expected,
        None => false,
    })
}

async fn list_users(state: web::Data<StoreState>) -> HttpResponse {
    HttpResponse::Ok().json(&*state.users.lock().unwrap())
}

async fn get_user(state: web::Data<StoreState>, id: web::Path<i64>) -> HttpResponse {
    let users = state.users.lock().unwrap();
    match users.iter().find(|u| u["id"] == *id) {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound().json(json!({})),
    }
}

async fn patch_user(
    state: web::Data<StoreState>,
    id: web::Path<i64>,
    body: web::Json<Value>,
) -> HttpResponse {
    let mut users = state.users.lock().unwrap();
    match users.iter_mut().find(|u| u["id"] == *id) {
        Some(user) => {
            if let (Some(target), Some(changes)) = (user.as_object_mut(), body.as_object()) {
                for (key, value) in changes {
                    target.insert(key.clone(), value.clone());
                }
            }
            HttpResponse::Ok().json(&*user)
        }
        None => HttpResponse::NotFound().json(json!({})),
    }
}

async fn list_properties(
    state: web::Data<StoreState>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let properties = state.properties.lock().unwrap();
    let found: Vec<&Value> = properties.iter().filter(|p| matches_query(p, &query)).collect();
    HttpResponse::Ok().json(found)
}

async fn create_property(state: web::Data<StoreState>, body: web::Json<Value>) -> HttpResponse {
    let mut properties = state.properties.lock().unwrap();
    let mut doc = body.into_inner();
    doc["id"] = json!(properties.len() as i64 + 1);
    properties.push(doc.clone());
    HttpResponse::Created().json(doc)
}

async fn delete_property(state: web::Data<StoreState>, id: web::Path<i64>) -> HttpResponse {
    let mut properties = state.properties.lock().unwrap();
    let before = properties.len();
    properties.retain(|p| p["id"] != *id);
    if properties.len() == before {
        HttpResponse::NotFound().json(json!({}))
    } else {
        HttpResponse::Ok().json(json!({}))
    }
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("store exploded")
}

/// Starts the emulated store and returns its base URL
fn spawn_store() -> String {
    Lazy::force(&TRACING);

    let state = web::Data::new(StoreState {
        users: Mutex::new(vec![
            user_doc(1, "admin", "Admin Alice"),
            user_doc(4, "owner", "Owner Diana"),
            user_doc(8, "tenant", "Tenant Hannah"),
        ]),
        properties: Mutex::new(vec![
            property_doc(1, 4, "Chicago"),
            property_doc(2, 4, "Houston"),
            property_doc(3, 5, "Phoenix"),
        ]),
    });

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/users", web::get().to(list_users))
            .route("/users/{id}", web::get().to(get_user))
            .route("/users/{id}", web::patch().to(patch_user))
            .route("/properties", web::get().to(list_properties))
            .route("/properties", web::post().to(create_property))
            .route("/properties/{id}", web::delete().to(delete_property))
            .route("/appointments", web::get().to(broken))
    })
    .listen(listener)
    .unwrap()
    .workers(1)
    .run();

    actix_web::rt::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

fn client(base_url: String) -> StoreClient {
    StoreClient::new(&StoreConfig {
        backend: StoreBackend::Rest,
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[actix_web::test]
async fn test_users_round_trip_through_store() {
    let repo = RestUserRepository::new(client(spawn_store()));

    let users = repo.list().await.unwrap();
    assert_eq!(users.len(), 3);
    assert!(users[1].matches_credentials("owner4@rentify.com", "owner123"));

    let owner = repo.find_by_id(4).await.unwrap().unwrap();
    assert_eq!(owner.role, Role::Owner);
    assert!(repo.find_by_id(99).await.unwrap().is_none());

    let update = ProfileUpdate {
        phone: Some("5550100".to_string()),
        ..Default::default()
    };
    let updated = repo.update_profile(8, &update).await.unwrap();
    assert_eq!(updated.phone, "5550100");
    assert_eq!(updated.name, "Tenant Hannah");

    let verified = repo.mark_verified(8).await.unwrap();
    assert!(verified.verified);

    match repo.mark_verified(99).await {
        Err(DomainError::NotFound { resource }) => assert_eq!(resource, "users/99"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[actix_web::test]
async fn test_properties_query_create_delete() {
    let repo = RestPropertyRepository::new(client(spawn_store()));

    assert_eq!(repo.list_by_owner(4).await.unwrap().len(), 2);

    let params = vec![("city".to_string(), "Phoenix".to_string())];
    let found = repo.search(&params).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].owner_id, 5);

    let created = repo
        .create(NewProperty {
            title: "Garden Flat".to_string(),
            description: "Ground floor".to_string(),
            city: "New York".to_string(),
            property_type: "Apartment".to_string(),
            price: 2100,
            images: vec!["https://picsum.photos/800/600".to_string()],
            owner_id: 4,
            highlight: false,
            date_posted: chrono::NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            verified: false,
            availability: Availability::Available,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(repo.list_by_owner(4).await.unwrap().len(), 3);

    repo.delete(created.id).await.unwrap();
    assert!(matches!(
        repo.delete(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[actix_web::test]
async fn test_store_failures_become_store_errors() {
    let repo = RestAppointmentRepository::new(client(spawn_store()));
    match repo.list().await {
        Err(DomainError::Store { message }) => assert!(message.contains("500")),
        other => panic!("expected store error, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_unreachable_store() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let repo = RestUserRepository::new(client(format!("http://127.0.0.1:{}", port)));
    assert!(matches!(repo.list().await, Err(DomainError::Store { .. })));
}
