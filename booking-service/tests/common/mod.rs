use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use booking_service::domain::appointment::errors::AppointmentError;
use booking_service::domain::appointment::models::Appointment;
use booking_service::domain::appointment::models::AppointmentId;
use booking_service::domain::appointment::ports::AppointmentRepository;
use booking_service::domain::appointment::service::AppointmentService;
use booking_service::domain::user::errors::UserError;
use booking_service::domain::user::models::EmailAddress;
use booking_service::domain::user::models::User;
use booking_service::domain::user::models::UserId;
use booking_service::domain::user::ports::UserRepository;
use booking_service::domain::user::service::UserService;
use booking_service::inbound::http::router::create_router;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// User store keeping rows in memory; enforces email uniqueness on insert.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }
}

#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Mutex<HashMap<AppointmentId, Appointment>>,
}

impl InMemoryAppointmentRepository {
    fn sorted_where(&self, predicate: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let mut found: Vec<Appointment> = self
            .appointments
            .lock()
            .unwrap()
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        found
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        self.appointments
            .lock()
            .unwrap()
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        Ok(self.appointments.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_client(
        &self,
        client_id: UserId,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.sorted_where(|a| a.client_id == client_id))
    }

    async fn find_by_professional(
        &self,
        professional_id: UserId,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.sorted_where(|a| a.professional_id == professional_id))
    }

    async fn update_date(
        &self,
        id: AppointmentId,
        date: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.lock().unwrap();
        let appointment = appointments
            .get_mut(&id)
            .ok_or(AppointmentError::NotFound(id))?;
        appointment.date = date;
        Ok(appointment.clone())
    }

    async fn delete(&self, id: AppointmentId) -> Result<(), AppointmentError> {
        self.appointments
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppointmentError::NotFound(id))
    }
}

/// Test application that spawns a real server backed by in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub users: Arc<InMemoryUserRepository>,
}

/// A registered account: its token and id.
pub struct Account {
    pub id: String,
    pub token: String,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Low-cost hashing keeps the suite fast.
        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET, Duration::hours(1))
                .with_password_hasher(PasswordHasher::with_params(1024, 1, 1).unwrap()),
        );

        let users = Arc::new(InMemoryUserRepository::default());
        let appointments = Arc::new(InMemoryAppointmentRepository::default());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let appointment_service =
            Arc::new(AppointmentService::new(appointments, Arc::clone(&users)));

        let router = create_router(user_service, appointment_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            users,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body.
    pub async fn register(&self, name: &str, email: &str, role: Option<&str>) -> Value {
        let mut body = json!({
            "name": name,
            "email": email,
            "password": "secret1",
        });
        if let Some(role) = role {
            body["role"] = json!(role);
        }

        let response = self
            .post("/register")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }

    pub async fn register_account(&self, name: &str, email: &str, role: Option<&str>) -> Account {
        let body = self.register(name, email, role).await;
        Account {
            id: body["data"]["user"]["id"].as_str().unwrap().to_string(),
            token: body["data"]["token"].as_str().unwrap().to_string(),
        }
    }
}
