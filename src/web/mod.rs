use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    error::Error,
    models::{
        apartment::{Apartment, ApartmentFeatures},
        building::Building,
    },
    pagination,
    services::{apartments, buildings},
    validation,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Explicit per-request authentication context, attached by the auth
/// middleware instead of being read from ambient session state.
#[derive(Clone, Copy, Debug)]
pub struct RequestContext {
    pub authenticated: bool,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBuildingRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct RenameBuildingRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ApartmentRequest {
    pub name: String,
    pub bed: String,
    pub bath: String,
    pub sq_ft: String,
    pub price: String,
}

impl ApartmentRequest {
    fn into_features(self) -> ApartmentFeatures {
        ApartmentFeatures {
            name: self.name,
            bed: self.bed,
            bath: self.bath,
            sq_ft: self.sq_ft,
            price: self.price,
        }
        .trimmed()
    }
}

#[derive(Serialize)]
pub struct BuildingsResponse {
    pub buildings: Vec<Building>,
}

#[derive(Serialize)]
pub struct ApartmentsResponse {
    pub apartments: Vec<Apartment>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/buildings", get(list_buildings).post(create_building))
        .route(
            "/api/buildings/:building_id",
            get(view_building).put(rename_building).delete(delete_building),
        )
        .route(
            "/api/buildings/:building_id/apartments",
            get(list_apartments).post(create_apartment),
        )
        .route(
            "/api/buildings/:building_id/apartments/:apartment_id",
            get(view_apartment).put(update_apartment).delete(delete_apartment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind http listener on {}: {}", bind_addr, err));
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .expect("HTTP server crashed");
}

async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let authenticated = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token == state.config.api_token)
        .unwrap_or(false);

    let context = RequestContext { authenticated };
    if !context.authenticated {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "You must be signed in to do that.".to_string(),
            }),
        )
            .into_response();
    }

    req.extensions_mut().insert(context);
    next.run(req).await
}

/// Status for a tagged failure surfaced to a client. Absent or malformed
/// identifiers read as not-found; recoverable validation failures carry
/// their message at 422; store failures stay opaque.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound | Error::InvalidIdentifier => StatusCode::NOT_FOUND,
        Error::InvalidLength
        | Error::NotAWholeNumber
        | Error::DuplicateName
        | Error::InvalidPage => StatusCode::UNPROCESSABLE_ENTITY,
        Error::StorageFailure(_) | Error::ConnectionFailure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(err: Error) -> Response {
    (
        status_for(&err),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

async fn list_buildings(
    State(state): State<AppState>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Response {
    let page = match pagination::parse_page(page.as_deref()) {
        Ok(page) => page,
        Err(_) => return Redirect::to("/api/buildings?page=0").into_response(),
    };
    match buildings::list(&state.config, page) {
        Ok(buildings) => Json(ApiResponse {
            data: BuildingsResponse { buildings },
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_building(
    State(state): State<AppState>,
    Json(body): Json<CreateBuildingRequest>,
) -> Response {
    match buildings::create(&state.config, body.name.trim()) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}

async fn view_building(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
) -> Response {
    let building_id = match validation::parse_id(&building_id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    match buildings::view(&state.config, building_id) {
        Ok(building) => Json(ApiResponse { data: building }).into_response(),
        Err(err) => error_response(err),
    }
}

async fn rename_building(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
    Json(body): Json<RenameBuildingRequest>,
) -> Response {
    let building_id = match validation::parse_id(&building_id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    match buildings::rename(&state.config, building_id, body.name.trim()) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_building(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
) -> Response {
    let building_id = match validation::parse_id(&building_id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    match buildings::remove(&state.config, building_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_apartments(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Response {
    let building_id = match validation::parse_id(&building_id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    let page = match pagination::parse_page(page.as_deref()) {
        Ok(page) => page,
        Err(_) => {
            let target = format!("/api/buildings/{}/apartments?page=0", building_id);
            return Redirect::to(&target).into_response();
        }
    };
    match apartments::list(&state.config, building_id, page) {
        Ok(apartments) => Json(ApiResponse {
            data: ApartmentsResponse { apartments },
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_apartment(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
    Json(body): Json<ApartmentRequest>,
) -> Response {
    let building_id = match validation::parse_id(&building_id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };
    let features = body.into_features();
    match apartments::create(&state.config, building_id, &features) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}

async fn view_apartment(
    State(state): State<AppState>,
    Path((building_id, apartment_id)): Path<(String, String)>,
) -> Response {
    let (building_id, apartment_id) =
        match parse_id_pair(&building_id, &apartment_id) {
            Ok(ids) => ids,
            Err(err) => return error_response(err),
        };
    match apartments::view(&state.config, building_id, apartment_id) {
        Ok(apartment) => Json(ApiResponse { data: apartment }).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_apartment(
    State(state): State<AppState>,
    Path((building_id, apartment_id)): Path<(String, String)>,
    Json(body): Json<ApartmentRequest>,
) -> Response {
    let (building_id, apartment_id) =
        match parse_id_pair(&building_id, &apartment_id) {
            Ok(ids) => ids,
            Err(err) => return error_response(err),
        };
    let features = body.into_features();
    match apartments::update(&state.config, building_id, apartment_id, &features) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_apartment(
    State(state): State<AppState>,
    Path((building_id, apartment_id)): Path<(String, String)>,
) -> Response {
    let (building_id, apartment_id) =
        match parse_id_pair(&building_id, &apartment_id) {
            Ok(ids) => ids,
            Err(err) => return error_response(err),
        };
    match apartments::remove(&state.config, building_id, apartment_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn parse_id_pair(building_id: &str, apartment_id: &str) -> Result<(i32, i32), Error> {
    Ok((
        validation::parse_id(building_id)?,
        validation::parse_id(apartment_id)?,
    ))
}
