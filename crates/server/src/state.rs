use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Whether requests pass through the bearer token layer
    pub auth_enabled: bool,
}
