//! Map explorer: per-client sessions that filter places by distance and
//! text, lay them out as (clustered) markers, track the viewport and turn
//! selections into camera moves.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/explorer/sessions` | Mount a session |
//! | GET | `/api/explorer/sessions/{id}` | Current state |
//! | DELETE | `/api/explorer/sessions/{id}` | Unmount |
//! | POST | `/api/explorer/sessions/{id}/geolocation` | One-shot geolocation result |
//! | PUT | `/api/explorer/sessions/{id}/query` | Search text |
//! | PUT | `/api/explorer/sessions/{id}/clustering` | Clustering toggle |
//! | PUT | `/api/explorer/sessions/{id}/selection` | Selected place |
//! | POST | `/api/explorer/sessions/{id}/markers/{place_id}/click` | Marker click |
//! | POST | `/api/explorer/sessions/{id}/viewport` | Pan/zoom end |
//! | POST | `/api/explorer/sessions/{id}/reload` | Refetch places |

pub mod dtos;
pub mod handlers;
pub mod pipeline;
pub mod routes;
pub mod services;
pub mod workers;

pub use services::ExplorerService;
pub use workers::SessionSweeper;
