//! Fixtures shared by the unit tests.

use chrono::{TimeZone, Utc};

use eventscout_core::model::{Difficulty, Event, EventId};

/// A bland event that matches nothing in particular, customised by `edit`.
pub fn event(id: &str, edit: impl FnOnce(&mut Event)) -> Event {
    let mut event = Event {
        id: EventId::from(id),
        name: "Untitled".into(),
        event_type: "General".into(),
        address: "Nowhere".into(),
        description: String::new(),
        date: Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap(),
        duration: "1 hour".into(),
        max_participants: 100,
        current_participants: 0,
        difficulty: Difficulty::Intermediate,
        requirements: vec![],
        organizer: "Nobody".into(),
        contact: "nobody@example.com".into(),
        image_url: String::new(),
        created_at: None,
        updated_at: None,
    };
    edit(&mut event);
    event
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    event_type: &str,
    address: &str,
    description: &str,
    (month, day, hour): (u32, u32, u32),
    (max, current): (u64, u64),
    difficulty: Difficulty,
    requirements: &[&str],
    organizer: &str,
    contact: &str,
) -> Event {
    Event {
        id: EventId::from(id),
        name: name.into(),
        event_type: event_type.into(),
        address: address.into(),
        description: description.into(),
        date: Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap(),
        duration: "3 hours".into(),
        max_participants: max,
        current_participants: current,
        difficulty,
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        organizer: organizer.into(),
        contact: contact.into(),
        image_url: String::new(),
        created_at: None,
        updated_at: None,
    }
}

/// A small catalogue in chronological order.
pub fn sample_events() -> Vec<Event> {
    vec![
        seed(
            "photo",
            "Weekend Photography Workshop",
            "Photography",
            "Central Park, New York, NY 10024",
            "Learn the fundamentals of landscape and portrait photography.",
            (6, 15, 9),
            (15, 8),
            Difficulty::Beginner,
            &["DSLR or Mirrorless Camera", "Comfortable walking shoes"],
            "Sarah Johnson",
            "sarah.photo@email.com",
        ),
        seed(
            "pottery",
            "Pottery Making for Beginners",
            "Ceramics",
            "Artisan Studio, 45 Clay Street, Brooklyn, NY 11201",
            "Learn centering, throwing, and glazing in this beginner-friendly class.",
            (6, 18, 14),
            (12, 5),
            Difficulty::Beginner,
            &["Apron or old clothes", "Towel"],
            "Michael Chen",
            "mike.pottery@email.com",
        ),
        seed(
            "sketch",
            "Urban Sketching Adventure",
            "Drawing",
            "Times Square, Manhattan, NY 10036",
            "Capture the energy of the city through sketching!",
            (6, 20, 10),
            (20, 12),
            Difficulty::Intermediate,
            &["Sketchbook", "Pencils and pens"],
            "Emma Rodriguez",
            "emma.sketch@email.com",
        ),
        seed(
            "cooking",
            "Cooking Masterclass: Italian Cuisine",
            "Cooking",
            "Culinary Institute, 789 Food Avenue, Queens, NY 11375",
            "Make fresh pasta, classic sauces, and traditional desserts.",
            (6, 22, 16),
            (16, 14),
            Difficulty::Intermediate,
            &["Apron", "Appetite for learning!"],
            "Chef Antonio Rossi",
            "antonio.chef@email.com",
        ),
        seed(
            "guitar",
            "Beginner's Guitar Circle",
            "Music",
            "Community Center, 123 Harmony Lane, Manhattan, NY 10001",
            "Basic chords and strumming patterns in a supportive group.",
            (6, 25, 19),
            (10, 7),
            Difficulty::Beginner,
            &["Acoustic guitar", "Pick"],
            "David Martinez",
            "david.music@email.com",
        ),
        seed(
            "climbing",
            "Indoor Rock Climbing Introduction",
            "Climbing",
            "Vertical Adventures Gym, 456 Rock Street, Brooklyn, NY 11215",
            "Safety basics, equipment usage, and fundamental climbing techniques.",
            (6, 28, 18),
            (12, 9),
            Difficulty::Beginner,
            &["Athletic clothing", "Closed-toe shoes", "Water bottle"],
            "Lisa Thompson",
            "lisa.climb@email.com",
        ),
        seed(
            "editing",
            "Digital Photography Editing Bootcamp",
            "Photography",
            "Tech Hub, 159 Digital Avenue, Brooklyn, NY 11222",
            "Advanced editing techniques using Lightroom and Photoshop.",
            (7, 8, 14),
            (14, 10),
            Difficulty::Advanced,
            &["Laptop with Lightroom/Photoshop", "Sample photos to edit"],
            "Alex Turner",
            "alex.digital@email.com",
        ),
    ]
}
