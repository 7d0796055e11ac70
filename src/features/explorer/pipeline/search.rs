use crate::features::explorer::pipeline::derived::DerivedPlace;
use crate::features::places::models::Place;

/// Case-insensitive substring match on name, location, district or state.
/// The query is used as given; an empty query matches everything.
pub fn matches_query(place: &Place, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    std::iter::once(Some(place.name.as_str()))
        .chain([
            place.location.as_deref(),
            place.district.as_deref(),
            place.state.as_deref(),
        ])
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the places matching `query`, preserving order
pub fn filter_by_text(places: Vec<DerivedPlace>, query: &str) -> Vec<DerivedPlace> {
    if query.is_empty() {
        return places;
    }
    places
        .into_iter()
        .filter(|p| matches_query(&p.place, query))
        .collect()
}
