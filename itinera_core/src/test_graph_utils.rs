pub mod test_graph {
    use crate::geopoint::GeoPoint;
    use crate::graph::RoadGraph;
    use crate::types::NodeId;

    #[derive(Copy, Clone)]
    pub enum CoastalPlace {
        Harbour = 1,
        Market = 2,
        Station = 3,
        Museum = 4,
        Beach = 5,
        Hilltop = 6,
    }

    impl From<CoastalPlace> for NodeId {
        fn from(value: CoastalPlace) -> Self {
            value as NodeId
        }
    }

    fn place_position(place: CoastalPlace) -> GeoPoint {
        match place {
            CoastalPlace::Harbour => GeoPoint::new(-1.2654, 116.8190),
            CoastalPlace::Market => GeoPoint::new(-1.2572, 116.8266),
            CoastalPlace::Station => GeoPoint::new(-1.2480, 116.8350),
            CoastalPlace::Museum => GeoPoint::new(-1.2530, 116.8450),
            CoastalPlace::Beach => GeoPoint::new(-1.2410, 116.8530),
            CoastalPlace::Hilltop => GeoPoint::new(-1.2300, 116.8400),
        }
    }

    /// Adds a two-way road whose length is the great-circle distance scaled
    /// by a detour factor >= 1, keeping the great-circle heuristic
    /// admissible on this graph.
    pub fn add_road(graph: &mut RoadGraph, from: CoastalPlace, to: CoastalPlace, detour: f64) {
        assert!(detour >= 1.0);

        let length = place_position(from).haversine_distance(&place_position(to)) * detour;
        graph.add_edge(from.into(), to.into(), length);
        graph.add_edge(to.into(), from.into(), length);
    }

    /// Small two-way road network around a bay. Every pair of places is
    /// connected, some only through multi-hop detours.
    pub fn create_coastal_graph() -> RoadGraph {
        let mut graph = RoadGraph::new();

        for place in [
            CoastalPlace::Harbour,
            CoastalPlace::Market,
            CoastalPlace::Station,
            CoastalPlace::Museum,
            CoastalPlace::Beach,
            CoastalPlace::Hilltop,
        ] {
            graph.add_node(place.into(), place_position(place));
        }

        add_road(&mut graph, CoastalPlace::Harbour, CoastalPlace::Market, 1.3);
        add_road(&mut graph, CoastalPlace::Market, CoastalPlace::Station, 1.2);
        add_road(&mut graph, CoastalPlace::Station, CoastalPlace::Museum, 1.4);
        add_road(&mut graph, CoastalPlace::Museum, CoastalPlace::Beach, 1.2);
        add_road(&mut graph, CoastalPlace::Station, CoastalPlace::Hilltop, 1.5);
        add_road(&mut graph, CoastalPlace::Hilltop, CoastalPlace::Beach, 1.3);
        add_road(&mut graph, CoastalPlace::Harbour, CoastalPlace::Museum, 2.2);

        graph
    }
}
