mod session_request_dto;
mod session_state_dto;

pub use session_request_dto::{
    CreateSessionDto, GeolocationResultDto, UpdateClusteringDto, UpdateQueryDto,
    UpdateSelectionDto, ViewportChangeDto,
};
pub use session_state_dto::{
    ExplorerPlaceDto, ExplorerStateDto, GeolocationStatus, GeolocationStatusDto, LayerItemDto,
    MarkerDto, MarkerLayersDto, RadiusStatusDto, SkippedMarkerDto,
};
