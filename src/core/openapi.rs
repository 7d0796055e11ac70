use utoipa::{Modify, OpenApi};

use crate::features::explorer::{dtos as explorer_dtos, handlers as explorer_handlers, pipeline};
use crate::features::places::{dtos as places_dtos, handlers as places_handlers, models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Places
        places_handlers::list_places,
        places_handlers::get_place,
        // Explorer
        explorer_handlers::create_session,
        explorer_handlers::get_session,
        explorer_handlers::delete_session,
        explorer_handlers::resolve_geolocation,
        explorer_handlers::update_query,
        explorer_handlers::update_clustering,
        explorer_handlers::update_selection,
        explorer_handlers::click_marker,
        explorer_handlers::change_viewport,
        explorer_handlers::reload_places,
    ),
    components(
        schemas(
            Meta,
            // Places
            models::PlaceDetail,
            places_dtos::PlaceResponseDto,
            ApiResponse<places_dtos::PlaceResponseDto>,
            ApiResponse<Vec<places_dtos::PlaceResponseDto>>,
            // Map primitives
            pipeline::Coordinate,
            pipeline::BoundingBox,
            pipeline::MapViewState,
            pipeline::ViewportSize,
            pipeline::RadiusPolicy,
            pipeline::GeolocationError,
            pipeline::Delivery,
            pipeline::MarkerBadge,
            pipeline::MarkerStyle,
            pipeline::LayerMode,
            pipeline::ExplorerEvent,
            pipeline::MapCommand,
            // Explorer
            explorer_dtos::CreateSessionDto,
            explorer_dtos::GeolocationResultDto,
            explorer_dtos::UpdateQueryDto,
            explorer_dtos::UpdateClusteringDto,
            explorer_dtos::UpdateSelectionDto,
            explorer_dtos::ViewportChangeDto,
            explorer_dtos::GeolocationStatus,
            explorer_dtos::GeolocationStatusDto,
            explorer_dtos::RadiusStatusDto,
            explorer_dtos::ExplorerPlaceDto,
            explorer_dtos::MarkerDto,
            explorer_dtos::LayerItemDto,
            explorer_dtos::SkippedMarkerDto,
            explorer_dtos::MarkerLayersDto,
            explorer_dtos::ExplorerStateDto,
            ApiResponse<explorer_dtos::ExplorerStateDto>,
        )
    ),
    tags(
        (name = "places", description = "Place catalog, including places without coordinates"),
        (name = "explorer", description = "Map explorer sessions: proximity, search, markers and viewport"),
    ),
    info(
        title = "EasyTrip API",
        version = "0.1.0",
        description = "Map explorer and place discovery API for EasyTrip",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
