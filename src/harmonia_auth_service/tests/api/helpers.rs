use harmonia_adapters::{InMemoryUserRepository, JwtTokenService, MockEmailNotifier};
use harmonia_auth_service::AuthService;
use harmonia_core::{HashParams, NewUser, Role, User, UserRepository};
use secrecy::Secret;
use serde_json::{Value, json};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-with-enough-length";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub users: InMemoryUserRepository,
    pub notifier: MockEmailNotifier,
}

/// Fast Argon2 parameters so the suite stays quick. Production values come
/// from configuration.
pub fn test_hash_params() -> HashParams {
    HashParams {
        m_cost_kib: 1024,
        t_cost: 1,
        p_cost: 1,
    }
}

pub async fn spawn_app() -> TestApp {
    let users = InMemoryUserRepository::default();
    let tokens = JwtTokenService::new(Secret::new(TEST_JWT_SECRET.to_owned()), 3600);
    let notifier = MockEmailNotifier::default();

    let service = AuthService::new(
        users.clone(),
        tokens,
        notifier.clone(),
        test_hash_params(),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(service.run(listener, None));

    TestApp {
        address,
        client: reqwest::Client::new(),
        users,
        notifier,
    }
}

impl TestApp {
    pub async fn post_register(&self, email: &str, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/register", self.address))
            .json(&json!({
                "email": email,
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let response = self.post_login(email, password).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_owned()
    }

    pub async fn post_forgot_password(&self, email: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/forgot-password", self.address))
            .json(&json!({ "email": email }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_reset_password(&self, token: &str, new_password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/reset-password", self.address))
            .json(&json!({ "token": token, "newPassword": new_password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_me(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(format!("{}/me", self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn get_users(&self, token: &str, role: Option<&str>) -> reqwest::Response {
        let mut request = self
            .client
            .get(format!("{}/users", self.address))
            .bearer_auth(token);
        if let Some(role) = role {
            request = request.query(&[("role", role)]);
        }
        request.send().await.expect("Failed to execute request")
    }

    /// Seeds a user straight into the repository, bypassing the HTTP API.
    pub async fn seed_user(
        &self,
        email: &str,
        username: &str,
        password: &str,
        roles: Option<Vec<Role>>,
    ) -> User {
        let user = User::create(
            NewUser {
                email: email.to_owned(),
                username: username.to_owned(),
                password: Secret::new(password.to_owned()),
                roles,
            },
            None,
            &test_hash_params(),
        )
        .await
        .expect("Failed to build seed user");

        self.users.save(&user).await.expect("Failed to seed user");
        user
    }

    /// Issues a token signed with the app's secret but already expired.
    pub async fn expired_token_for(&self, user: &User) -> String {
        use harmonia_core::TokenService;

        let expired_issuer = JwtTokenService::new(Secret::new(TEST_JWT_SECRET.to_owned()), -120);
        expired_issuer
            .generate_token(user)
            .await
            .expect("Failed to issue expired token")
    }
}

pub async fn error_kind(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Error body was not JSON");
    body["kind"].as_str().expect("Error body had no kind").to_owned()
}
