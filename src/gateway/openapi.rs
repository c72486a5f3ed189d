//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateAccountRequest, TransferRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Ledger API",
        version = "0.1.0",
        description = "Accounts, balances and atomic transfers. Amounts are integers in minor currency units.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::get_balance,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::delete_account,
        crate::gateway::handlers::transfer::transfer,
    ),
    components(
        schemas(
            HealthResponse,
            CreateAccountRequest,
            TransferRequest,
        )
    ),
    tags(
        (name = "Account", description = "Account lifecycle and balance queries"),
        (name = "Transfer", description = "Atomic fund transfers"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
