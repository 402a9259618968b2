use serde::{Deserialize, Serialize};

/// A local event normalized from the events-discovery service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub image: String,
    pub category: String,
    pub location: String,
}

/// Fixed placeholder events shown when the discovery service is unreachable
/// or the access credential is missing or rejected. Deterministic so the
/// events view always has something to render.
pub fn sample_events(city: &str) -> Vec<Event> {
    let venue = |fallback: &str| {
        if city.is_empty() {
            fallback.to_string()
        } else {
            city.to_string()
        }
    };
    vec![
        Event {
            id: "mock-1".to_string(),
            name: "Summer Music Festival".to_string(),
            date: "2026-03-15".to_string(),
            image: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=400".to_string(),
            category: "Music".to_string(),
            location: venue("Local Venue"),
        },
        Event {
            id: "mock-2".to_string(),
            name: "International Football Match".to_string(),
            date: "2026-04-02".to_string(),
            image: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400".to_string(),
            category: "Sports".to_string(),
            location: venue("Stadium"),
        },
        Event {
            id: "mock-3".to_string(),
            name: "Broadway: The Lion King".to_string(),
            date: "2026-03-20".to_string(),
            image: "https://images.unsplash.com/photo-1507676184212-d03ab07a01bf?w=400".to_string(),
            category: "Arts & Theatre".to_string(),
            location: venue("Grand Theatre"),
        },
        Event {
            id: "mock-4".to_string(),
            name: "Family Fun Carnival".to_string(),
            date: "2026-05-01".to_string(),
            image: "https://images.unsplash.com/photo-1513151233558-d860c5398176?w=400".to_string(),
            category: "Family".to_string(),
            location: venue("City Park"),
        },
        Event {
            id: "mock-5".to_string(),
            name: "Jazz Night Live".to_string(),
            date: "2026-03-28".to_string(),
            image: "https://images.unsplash.com/photo-1511192336575-5a79af67a629?w=400".to_string(),
            category: "Music".to_string(),
            location: venue("Jazz Club"),
        },
        Event {
            id: "mock-6".to_string(),
            name: "Basketball Championship".to_string(),
            date: "2026-04-10".to_string(),
            image: "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=400".to_string(),
            category: "Sports".to_string(),
            location: venue("Arena"),
        },
    ]
}
