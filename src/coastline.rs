//! Embedded coarse world coastline dataset.
//!
//! A static table of lon/lat polylines covering the continents and major
//! islands at a resolution adequate for a 1200x1000 px world map. Closed
//! outlines repeat their first vertex; open polylines (Antarctica, the
//! Japanese arc) do not.
//!
//! Vertices are (longitude, latitude) in degrees, longitude in
//! [-180, 180], latitude in [-90, 90].

/// One coastline polyline, as (lon, lat) vertices in degrees.
pub type CoastSegment = &'static [(f32, f32)];

/// All world coastline segments, continents first, then islands.
#[must_use]
pub fn world_segments() -> &'static [CoastSegment] {
    WORLD
}

static WORLD: &[CoastSegment] = &[
    NORTH_AMERICA,
    GREENLAND,
    SOUTH_AMERICA,
    AFRICA,
    EURASIA,
    AUSTRALIA,
    ANTARCTICA,
    GREAT_BRITAIN,
    IRELAND,
    ICELAND,
    MADAGASCAR,
    BORNEO,
    SUMATRA,
    JAVA,
    NEW_GUINEA,
    JAPAN,
    LUZON,
    CUBA,
    TASMANIA,
    NEW_ZEALAND_NORTH,
    NEW_ZEALAND_SOUTH,
];

static NORTH_AMERICA: CoastSegment = &[
    (-168.0, 65.5),
    (-161.0, 58.7),
    (-151.0, 59.2),
    (-146.0, 60.5),
    (-140.0, 59.7),
    (-132.0, 55.0),
    (-127.0, 50.5),
    (-124.5, 48.4),
    (-124.0, 43.0),
    (-122.0, 37.8),
    (-117.5, 33.0),
    (-114.0, 29.5),
    (-110.0, 23.5),
    (-105.5, 20.0),
    (-101.0, 17.5),
    (-96.5, 15.7),
    (-93.0, 16.0),
    (-90.5, 13.9),
    (-87.0, 12.5),
    (-85.0, 10.0),
    (-83.0, 8.5),
    (-80.0, 8.0),
    (-77.5, 7.9),
    (-81.5, 9.5),
    (-83.5, 11.0),
    (-83.2, 15.0),
    (-86.0, 16.0),
    (-88.5, 17.5),
    (-87.5, 21.5),
    (-90.5, 21.3),
    (-94.5, 18.2),
    (-97.5, 22.0),
    (-97.0, 26.0),
    (-94.0, 29.5),
    (-89.5, 29.2),
    (-84.0, 30.0),
    (-81.0, 25.2),
    (-80.0, 26.5),
    (-81.5, 30.7),
    (-75.5, 35.3),
    (-76.0, 38.0),
    (-74.0, 40.5),
    (-70.0, 41.7),
    (-66.0, 44.5),
    (-61.0, 45.5),
    (-64.0, 49.0),
    (-60.0, 50.2),
    (-57.5, 54.5),
    (-60.5, 58.0),
    (-64.5, 60.3),
    (-69.5, 61.0),
    (-77.5, 62.5),
    (-79.0, 57.0),
    (-86.0, 55.5),
    (-92.5, 57.0),
    (-94.0, 59.0),
    (-92.5, 62.5),
    (-95.0, 68.0),
    (-108.0, 68.5),
    (-115.0, 69.5),
    (-128.0, 70.0),
    (-135.0, 69.0),
    (-141.0, 69.6),
    (-156.5, 71.3),
    (-166.0, 68.9),
    (-168.0, 65.5),
];

static GREENLAND: CoastSegment = &[
    (-45.0, 59.8),
    (-53.0, 65.5),
    (-53.5, 70.5),
    (-56.0, 75.0),
    (-61.0, 76.2),
    (-68.0, 79.5),
    (-58.0, 82.0),
    (-32.0, 83.6),
    (-21.0, 82.5),
    (-17.0, 80.0),
    (-22.0, 76.0),
    (-20.0, 70.5),
    (-25.0, 68.5),
    (-32.0, 67.5),
    (-40.5, 64.5),
    (-43.0, 60.0),
    (-45.0, 59.8),
];

static SOUTH_AMERICA: CoastSegment = &[
    (-77.0, 8.0),
    (-75.0, 10.5),
    (-71.5, 12.4),
    (-64.0, 10.5),
    (-60.0, 8.5),
    (-52.0, 5.0),
    (-50.0, 0.0),
    (-44.0, -2.8),
    (-39.5, -4.5),
    (-35.0, -5.5),
    (-37.0, -11.0),
    (-39.0, -14.0),
    (-40.0, -20.0),
    (-48.0, -25.5),
    (-51.5, -31.0),
    (-56.0, -34.7),
    (-58.5, -34.0),
    (-57.5, -36.5),
    (-62.0, -39.0),
    (-65.0, -40.5),
    (-65.5, -45.0),
    (-68.5, -50.0),
    (-69.0, -52.0),
    (-68.5, -54.9),
    (-71.0, -54.0),
    (-73.5, -50.0),
    (-73.5, -46.0),
    (-73.8, -41.5),
    (-73.5, -37.0),
    (-71.5, -32.0),
    (-70.5, -25.0),
    (-70.5, -18.3),
    (-75.5, -14.5),
    (-81.0, -6.0),
    (-80.0, -2.5),
    (-77.8, 3.5),
    (-77.8, 6.0),
    (-77.0, 8.0),
];

static AFRICA: CoastSegment = &[
    (-5.9, 35.8),
    (-10.0, 31.5),
    (-14.5, 26.0),
    (-17.0, 21.0),
    (-16.5, 16.0),
    (-17.5, 14.7),
    (-15.5, 11.0),
    (-13.0, 9.0),
    (-7.5, 4.4),
    (-4.0, 5.3),
    (1.5, 6.2),
    (6.5, 4.3),
    (9.5, 4.0),
    (9.0, -1.0),
    (11.5, -4.0),
    (13.5, -12.0),
    (11.8, -18.0),
    (14.5, -22.5),
    (16.5, -28.5),
    (18.5, -34.3),
    (20.0, -34.8),
    (25.5, -34.0),
    (28.0, -32.5),
    (31.0, -29.5),
    (35.5, -24.0),
    (40.5, -15.5),
    (39.5, -11.0),
    (39.5, -6.5),
    (41.0, -2.0),
    (44.5, 1.5),
    (51.0, 10.5),
    (48.0, 11.3),
    (43.5, 11.5),
    (43.0, 12.6),
    (39.5, 15.5),
    (37.5, 18.0),
    (34.0, 27.7),
    (32.5, 29.9),
    (31.0, 31.5),
    (25.0, 31.6),
    (19.5, 30.4),
    (15.5, 32.4),
    (11.0, 33.7),
    (10.2, 37.2),
    (5.5, 36.8),
    (-2.0, 35.3),
    (-5.9, 35.8),
];

static EURASIA: CoastSegment = &[
    (-9.5, 37.0),
    (-8.8, 41.8),
    (-9.5, 43.0),
    (-4.5, 43.6),
    (-1.2, 44.6),
    (-4.8, 48.4),
    (1.5, 50.9),
    (4.5, 53.3),
    (8.5, 55.5),
    (10.5, 57.5),
    (7.0, 58.0),
    (5.0, 60.0),
    (5.5, 62.0),
    (12.0, 65.0),
    (17.0, 69.0),
    (25.0, 71.0),
    (30.0, 70.0),
    (37.0, 66.5),
    (44.0, 66.5),
    (53.0, 68.5),
    (60.0, 69.0),
    (70.0, 72.5),
    (80.0, 73.0),
    (95.0, 76.0),
    (105.0, 77.5),
    (113.0, 74.0),
    (130.0, 72.0),
    (150.0, 71.0),
    (160.0, 69.5),
    (170.0, 69.5),
    (178.0, 65.0),
    (172.0, 61.0),
    (163.0, 59.0),
    (158.5, 52.5),
    (155.0, 59.5),
    (143.0, 59.0),
    (135.5, 54.5),
    (131.0, 42.5),
    (129.5, 40.0),
    (127.5, 39.5),
    (126.0, 34.8),
    (125.0, 39.8),
    (121.5, 38.8),
    (117.5, 38.5),
    (120.5, 34.5),
    (121.8, 31.0),
    (120.0, 26.5),
    (116.5, 23.0),
    (113.5, 22.0),
    (108.5, 21.5),
    (105.5, 19.0),
    (109.0, 12.5),
    (105.0, 9.0),
    (100.5, 13.5),
    (99.5, 9.0),
    (103.5, 1.4),
    (100.5, 6.0),
    (98.5, 8.5),
    (97.0, 16.5),
    (91.0, 22.0),
    (88.0, 21.5),
    (86.5, 20.0),
    (80.5, 15.5),
    (80.0, 10.0),
    (77.5, 8.1),
    (73.0, 15.5),
    (70.0, 20.5),
    (72.5, 22.0),
    (66.5, 25.0),
    (61.5, 25.0),
    (57.0, 26.5),
    (50.0, 30.0),
    (48.5, 28.5),
    (50.5, 26.5),
    (51.5, 24.3),
    (54.5, 24.2),
    (56.5, 26.3),
    (58.5, 23.5),
    (55.0, 17.0),
    (52.0, 16.5),
    (45.0, 12.7),
    (43.5, 12.7),
    (40.0, 16.5),
    (38.5, 21.5),
    (34.5, 28.0),
    (34.2, 31.3),
    (35.5, 33.0),
    (36.0, 36.5),
    (30.5, 36.3),
    (27.5, 37.0),
    (26.5, 40.0),
    (29.0, 41.2),
    (33.5, 42.0),
    (38.5, 40.9),
    (41.5, 41.5),
    (37.0, 45.0),
    (33.0, 45.5),
    (30.5, 46.2),
    (28.5, 44.0),
    (26.0, 40.2),
    (24.0, 40.5),
    (22.5, 38.0),
    (21.5, 37.0),
    (23.0, 36.5),
    (19.5, 41.5),
    (15.5, 43.5),
    (13.5, 45.6),
    (18.5, 40.5),
    (16.5, 38.9),
    (15.5, 40.0),
    (10.5, 42.5),
    (8.0, 43.9),
    (6.0, 43.1),
    (3.0, 42.4),
    (0.5, 40.5),
    (-0.5, 38.3),
    (-2.0, 36.7),
    (-5.4, 36.1),
    (-9.5, 37.0),
];

static AUSTRALIA: CoastSegment = &[
    (113.0, -25.5),
    (113.7, -22.0),
    (122.0, -17.0),
    (129.0, -15.0),
    (135.5, -12.0),
    (137.0, -16.0),
    (139.5, -17.5),
    (142.0, -11.0),
    (143.5, -14.0),
    (146.0, -19.0),
    (150.0, -22.5),
    (153.5, -27.5),
    (150.0, -37.5),
    (146.0, -39.0),
    (140.5, -38.0),
    (135.5, -35.0),
    (137.5, -33.0),
    (132.0, -32.0),
    (125.0, -32.5),
    (117.0, -35.0),
    (115.0, -34.0),
    (113.0, -25.5),
];

static ANTARCTICA: CoastSegment = &[
    (-180.0, -78.3),
    (-160.0, -75.5),
    (-145.0, -75.5),
    (-130.0, -74.5),
    (-120.0, -73.5),
    (-105.0, -73.0),
    (-90.0, -72.5),
    (-75.0, -71.5),
    (-62.0, -66.0),
    (-58.0, -63.8),
    (-55.0, -66.5),
    (-45.0, -77.5),
    (-35.0, -78.0),
    (-20.0, -73.5),
    (-10.0, -71.0),
    (0.0, -69.5),
    (15.0, -70.0),
    (30.0, -68.5),
    (45.0, -66.5),
    (60.0, -67.0),
    (75.0, -68.5),
    (90.0, -66.5),
    (105.0, -66.0),
    (120.0, -66.5),
    (135.0, -66.0),
    (150.0, -68.5),
    (165.0, -70.5),
    (170.0, -76.5),
    (180.0, -78.3),
];

static GREAT_BRITAIN: CoastSegment = &[
    (-5.7, 50.0),
    (1.5, 51.2),
    (0.5, 53.0),
    (-1.5, 55.0),
    (-2.5, 57.5),
    (-5.0, 58.6),
    (-6.0, 56.5),
    (-4.5, 54.5),
    (-4.5, 52.5),
    (-5.7, 50.0),
];

static IRELAND: CoastSegment = &[
    (-6.0, 52.2),
    (-10.0, 52.0),
    (-10.0, 54.3),
    (-8.0, 55.2),
    (-6.0, 54.5),
    (-6.0, 52.2),
];

static ICELAND: CoastSegment = &[
    (-22.5, 63.9),
    (-24.0, 65.5),
    (-21.0, 66.3),
    (-15.5, 66.3),
    (-13.5, 65.0),
    (-18.0, 63.4),
    (-22.5, 63.9),
];

static MADAGASCAR: CoastSegment = &[
    (44.0, -25.0),
    (43.5, -21.0),
    (44.5, -16.2),
    (49.5, -12.1),
    (50.5, -15.5),
    (47.5, -24.0),
    (44.0, -25.0),
];

static BORNEO: CoastSegment = &[
    (109.0, 1.0),
    (113.5, 6.8),
    (119.0, 5.0),
    (117.5, 0.0),
    (114.5, -3.5),
    (110.0, -2.0),
    (109.0, 1.0),
];

static SUMATRA: CoastSegment = &[
    (95.3, 5.6),
    (97.5, 5.2),
    (103.0, 1.0),
    (106.0, -3.0),
    (105.5, -5.8),
    (102.0, -4.5),
    (97.5, 1.5),
    (95.3, 5.6),
];

static JAVA: CoastSegment = &[
    (105.5, -6.8),
    (110.0, -6.9),
    (114.5, -7.7),
    (114.0, -8.6),
    (108.0, -7.8),
    (105.5, -6.8),
];

static NEW_GUINEA: CoastSegment = &[
    (131.0, -0.5),
    (136.0, -2.0),
    (141.0, -2.7),
    (146.0, -6.0),
    (150.5, -10.2),
    (143.5, -8.5),
    (138.5, -7.5),
    (134.0, -4.0),
    (131.0, -0.5),
];

// Open arc along the main Japanese islands.
static JAPAN: CoastSegment = &[
    (129.5, 31.5),
    (131.5, 33.5),
    (135.0, 34.5),
    (140.0, 35.5),
    (141.5, 38.5),
    (140.0, 41.5),
    (141.0, 43.0),
    (145.0, 44.0),
];

static LUZON: CoastSegment = &[
    (119.8, 16.5),
    (120.5, 18.5),
    (122.2, 18.3),
    (124.0, 14.0),
    (121.0, 13.8),
    (119.8, 16.5),
];

static CUBA: CoastSegment = &[
    (-84.5, 22.0),
    (-80.0, 23.2),
    (-77.0, 20.7),
    (-74.2, 20.2),
    (-77.5, 21.9),
    (-84.5, 22.0),
];

static TASMANIA: CoastSegment = &[
    (144.7, -40.7),
    (148.3, -40.9),
    (148.0, -43.2),
    (146.0, -43.6),
    (144.7, -40.7),
];

static NEW_ZEALAND_NORTH: CoastSegment = &[
    (172.8, -34.4),
    (174.3, -35.5),
    (175.9, -37.0),
    (178.3, -37.6),
    (177.0, -39.5),
    (174.8, -41.3),
    (174.5, -38.0),
    (172.8, -34.4),
];

static NEW_ZEALAND_SOUTH: CoastSegment = &[
    (173.0, -40.9),
    (174.2, -41.8),
    (172.7, -43.6),
    (169.5, -46.5),
    (166.5, -45.8),
    (168.5, -44.0),
    (171.5, -41.7),
    (173.0, -40.9),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_nonempty() {
        let segments = world_segments();
        assert!(!segments.is_empty());
        for seg in segments {
            assert!(seg.len() >= 2, "each polyline needs at least one edge");
        }
    }

    #[test]
    fn test_coordinates_in_bounds() {
        for seg in world_segments() {
            for &(lon, lat) in *seg {
                assert!((-180.0..=180.0).contains(&lon), "lon out of range: {lon}");
                assert!((-90.0..=90.0).contains(&lat), "lat out of range: {lat}");
            }
        }
    }

    #[test]
    fn test_continents_are_closed_loops() {
        for seg in [NORTH_AMERICA, GREENLAND, SOUTH_AMERICA, AFRICA, EURASIA, AUSTRALIA] {
            let first = seg.first().unwrap();
            let last = seg.last().unwrap();
            assert_eq!(first, last);
        }
    }

    #[test]
    fn test_antarctica_spans_the_map() {
        let first = ANTARCTICA.first().unwrap();
        let last = ANTARCTICA.last().unwrap();
        assert!((first.0 - -180.0).abs() < f32::EPSILON);
        assert!((last.0 - 180.0).abs() < f32::EPSILON);
    }
}
