//! Static named-region boundary table.
//!
//! Fallback data for boundary resolution when geocoding yields nothing:
//! seismically interesting belts, faults, trenches, and fixed boxes for
//! countries that show up constantly in earthquake queries. Keys are
//! lowercase; lookups must fold case before consulting the table.
//!
//! Entries spanning the antimeridian (Pacific Ring of Fire, Aleutians,
//! Fiji, Tonga) carry `min_lon > max_lon`; see the wraparound convention
//! on [`BoundingBox`].

use crate::models::BoundingBox;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Looks up a named region by lowercase key.
#[must_use]
pub fn named_region(name: &str) -> Option<BoundingBox> {
    NAMED_REGIONS.get(name).copied()
}

/// Number of entries in the table (exposed for diagnostics).
#[must_use]
pub fn region_count() -> usize {
    NAMED_REGIONS.len()
}

#[allow(clippy::too_many_lines)]
static NAMED_REGIONS: LazyLock<HashMap<&'static str, BoundingBox>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Seismic belts, faults, trenches
    m.insert(
        "pacific ring of fire",
        BoundingBox::new(-60.0, 60.0, 120.0, -70.0), // wraps the antimeridian
    );
    m.insert("ring of fire", BoundingBox::new(-60.0, 60.0, 120.0, -70.0));
    m.insert("himalayan region", BoundingBox::new(25.0, 38.0, 70.0, 98.0));
    m.insert("himalayas", BoundingBox::new(25.0, 38.0, 70.0, 98.0));
    m.insert(
        "san andreas fault",
        BoundingBox::new(32.0, 40.0, -125.0, -115.0),
    );
    m.insert("japan trench", BoundingBox::new(35.0, 42.0, 140.0, 146.0));
    m.insert("mariana trench", BoundingBox::new(10.0, 20.0, 144.0, 150.0));
    m.insert("mediterranean", BoundingBox::new(30.0, 46.0, -6.0, 37.0));
    m.insert("caribbean", BoundingBox::new(9.0, 24.0, -86.0, -59.0));
    m.insert("yellowstone", BoundingBox::new(44.0, 45.2, -111.2, -109.8));
    m.insert(
        "aleutian islands",
        BoundingBox::new(50.0, 55.0, 170.0, -160.0), // wraps the antimeridian
    );
    m.insert("andes", BoundingBox::new(-55.0, 10.0, -80.0, -62.0));
    m.insert(
        "east african rift",
        BoundingBox::new(-16.0, 16.0, 28.0, 42.0),
    );
    m.insert(
        "mid-atlantic ridge",
        BoundingBox::new(-55.0, 65.0, -45.0, -10.0),
    );
    m.insert("cascadia", BoundingBox::new(40.0, 50.0, -130.0, -120.0));
    m.insert("alpide belt", BoundingBox::new(25.0, 45.0, 0.0, 100.0));
    m.insert("sunda arc", BoundingBox::new(-11.0, 6.0, 94.0, 122.0));
    m.insert(
        "north anatolian fault",
        BoundingBox::new(38.0, 42.0, 26.0, 44.0),
    );

    // Countries
    m.insert("japan", BoundingBox::new(24.0, 46.0, 122.0, 146.0));
    m.insert("indonesia", BoundingBox::new(-11.0, 6.0, 95.0, 141.0));
    m.insert("chile", BoundingBox::new(-56.0, -17.0, -76.0, -66.0));
    m.insert("united states", BoundingBox::new(24.0, 50.0, -125.0, -66.0));
    m.insert("usa", BoundingBox::new(24.0, 50.0, -125.0, -66.0));
    m.insert("mexico", BoundingBox::new(14.0, 33.0, -118.0, -86.0));
    m.insert("turkey", BoundingBox::new(36.0, 42.0, 26.0, 45.0));
    m.insert("iran", BoundingBox::new(25.0, 40.0, 44.0, 63.0));
    m.insert("india", BoundingBox::new(6.0, 36.0, 68.0, 98.0));
    m.insert("china", BoundingBox::new(18.0, 54.0, 73.0, 135.0));
    m.insert("nepal", BoundingBox::new(26.0, 31.0, 80.0, 89.0));
    m.insert("philippines", BoundingBox::new(5.0, 20.0, 117.0, 127.0));
    m.insert("new zealand", BoundingBox::new(-47.0, -34.0, 166.0, 179.0));
    m.insert("italy", BoundingBox::new(36.0, 47.0, 6.0, 19.0));
    m.insert("greece", BoundingBox::new(34.0, 42.0, 19.0, 30.0));
    m.insert("peru", BoundingBox::new(-18.0, 0.0, -81.0, -68.0));
    m.insert("ecuador", BoundingBox::new(-5.0, 2.0, -81.0, -75.0));
    m.insert("colombia", BoundingBox::new(-4.0, 13.0, -79.0, -66.0));
    m.insert("guatemala", BoundingBox::new(13.0, 18.0, -92.0, -88.0));
    m.insert("nicaragua", BoundingBox::new(10.0, 15.0, -88.0, -83.0));
    m.insert("costa rica", BoundingBox::new(8.0, 11.0, -86.0, -82.0));
    m.insert("haiti", BoundingBox::new(18.0, 20.0, -75.0, -71.0));
    m.insert("pakistan", BoundingBox::new(23.0, 37.0, 60.0, 77.0));
    m.insert("afghanistan", BoundingBox::new(29.0, 39.0, 60.0, 75.0));
    m.insert("taiwan", BoundingBox::new(21.0, 26.0, 119.0, 122.0));
    m.insert(
        "papua new guinea",
        BoundingBox::new(-12.0, 0.0, 140.0, 156.0),
    );
    m.insert(
        "fiji",
        BoundingBox::new(-21.0, -12.0, 176.0, -178.0), // wraps the antimeridian
    );
    m.insert("vanuatu", BoundingBox::new(-21.0, -13.0, 166.0, 171.0));
    m.insert("solomon islands", BoundingBox::new(-12.0, -5.0, 155.0, 163.0));
    m.insert(
        "tonga",
        BoundingBox::new(-24.0, -15.0, -177.0, -173.0),
    );
    m.insert("russia", BoundingBox::new(41.0, 82.0, 19.0, 180.0));
    m.insert("iceland", BoundingBox::new(63.0, 67.0, -25.0, -13.0));
    m.insert("portugal", BoundingBox::new(36.0, 42.0, -10.0, -6.0));
    m.insert("morocco", BoundingBox::new(27.0, 36.0, -14.0, -1.0));
    m.insert("algeria", BoundingBox::new(18.0, 37.0, -9.0, 12.0));
    m.insert("egypt", BoundingBox::new(22.0, 32.0, 24.0, 37.0));
    m.insert("myanmar", BoundingBox::new(9.0, 29.0, 92.0, 102.0));
    m.insert("bangladesh", BoundingBox::new(20.0, 27.0, 88.0, 93.0));
    m.insert("australia", BoundingBox::new(-44.0, -10.0, 112.0, 154.0));
    m.insert("canada", BoundingBox::new(41.0, 84.0, -141.0, -52.0));
    m.insert("norway", BoundingBox::new(57.0, 72.0, 4.0, 31.0));
    m.insert("united kingdom", BoundingBox::new(49.0, 61.0, -9.0, 2.0));
    m.insert("france", BoundingBox::new(41.0, 51.0, -5.0, 10.0));
    m.insert("spain", BoundingBox::new(35.0, 44.0, -10.0, 5.0));
    m.insert("germany", BoundingBox::new(47.0, 55.0, 5.0, 16.0));
    m.insert("california", BoundingBox::new(32.0, 42.0, -125.0, -114.0));
    m.insert("alaska", BoundingBox::new(51.0, 72.0, -170.0, -129.0));

    m
});
