use crate::models::{EventRecord, EventStatus, EventType, ScheduleItem};

const CARD_IMAGE: &str = "/placeholder.svg?height=200&width=400";
const HERO_IMAGE: &str = "/placeholder.svg?height=400&width=800";

fn base(
    id: u32,
    title: &str,
    date: &str,
    location: &str,
    event_type: EventType,
    participants: u32,
    description: &str,
) -> EventRecord {
    EventRecord {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: None,
        location: location.to_string(),
        address: None,
        event_type,
        participants,
        max_participants: None,
        description: description.to_string(),
        organizer: None,
        difficulty: None,
        distance: None,
        elevation: None,
        requirements: None,
        schedule: None,
        image: HERO_IMAGE.to_string(),
        status: EventStatus::Upcoming,
    }
}

fn schedule(items: &[(&str, &str)]) -> Vec<ScheduleItem> {
    items
        .iter()
        .map(|(time, activity)| ScheduleItem {
            time: time.to_string(),
            activity: activity.to_string(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The public event catalog seeded at startup.
pub fn sample_events() -> Vec<EventRecord> {
    let mut mountain_trail = base(
        1,
        "Mountain Trail Adventure",
        "April 15, 2025",
        "Blue Ridge Mountains",
        EventType::Mountain,
        45,
        "A challenging mountain biking event through scenic trails with varying \
         difficulty levels. This event is perfect for intermediate to advanced riders \
         looking to test their skills on natural terrain. The route includes technical \
         descents, rocky sections, and beautiful forest paths.",
    );
    mountain_trail.time = Some("8:00 AM - 4:00 PM".to_string());
    mountain_trail.address = Some("123 Mountain Trail, Blue Ridge, GA 30513".to_string());
    mountain_trail.max_participants = Some(75);
    mountain_trail.organizer = Some("Mountain Biking Association".to_string());
    mountain_trail.difficulty = Some("Intermediate to Advanced".to_string());
    mountain_trail.distance = Some("25 miles".to_string());
    mountain_trail.elevation = Some("2,500 ft".to_string());
    mountain_trail.requirements = Some(strings(&[
        "Mountain bike in good condition",
        "Helmet (mandatory)",
        "Water and snacks",
        "Repair kit",
        "Weather-appropriate clothing",
    ]));
    mountain_trail.schedule = Some(schedule(&[
        ("7:00 AM", "Check-in opens"),
        ("7:45 AM", "Safety briefing"),
        ("8:00 AM", "Ride begins"),
        ("12:00 PM", "Lunch break at halfway point"),
        ("4:00 PM", "Estimated finish time"),
        ("5:00 PM", "Awards and social gathering"),
    ]));

    vec![
        mountain_trail,
        base(
            2,
            "City Night Ride",
            "May 2, 2025",
            "Downtown Metro",
            EventType::Road,
            120,
            "Experience the city lights on this nighttime group ride through the \
             metropolitan area.",
        ),
        base(
            3,
            "Charity Cross-Country",
            "June 10, 2025",
            "Riverside Park",
            EventType::Cross,
            75,
            "A fundraising event featuring cross-country trails to support local \
             environmental initiatives.",
        ),
        base(
            4,
            "Endurance Challenge",
            "July 8, 2025",
            "Desert Trails",
            EventType::Endurance,
            30,
            "Test your limits in this long-distance endurance ride through challenging \
             terrain.",
        ),
    ]
}

/// Events the current user is organizing (dashboard "My Events" tab).
pub fn sample_organized() -> Vec<EventRecord> {
    let mut adventure = base(
        1,
        "Mountain Trail Adventure",
        "April 15, 2025",
        "Blue Ridge Mountains",
        EventType::Mountain,
        45,
        "",
    );
    adventure.max_participants = Some(75);
    adventure.image = CARD_IMAGE.to_string();

    let mut night_ride = base(
        2,
        "City Night Ride",
        "May 2, 2025",
        "Downtown Metro",
        EventType::Road,
        120,
        "",
    );
    night_ride.max_participants = Some(150);
    night_ride.image = CARD_IMAGE.to_string();

    let mut exploration = base(
        3,
        "Weekend Trail Exploration",
        "March 10, 2025",
        "Forest Park",
        EventType::Mountain,
        28,
        "",
    );
    exploration.max_participants = Some(30);
    exploration.status = EventStatus::Past;
    exploration.image = CARD_IMAGE.to_string();

    vec![adventure, night_ride, exploration]
}

/// Events the current user has registered for (dashboard "Registered" tab).
pub fn sample_attending() -> Vec<EventRecord> {
    let mut charity = base(
        4,
        "Charity Cross-Country",
        "June 10, 2025",
        "Riverside Park",
        EventType::Cross,
        75,
        "",
    );
    charity.image = CARD_IMAGE.to_string();

    let mut endurance = base(
        5,
        "Endurance Challenge",
        "July 8, 2025",
        "Desert Trails",
        EventType::Endurance,
        30,
        "",
    );
    endurance.image = CARD_IMAGE.to_string();

    vec![charity, endurance]
}
