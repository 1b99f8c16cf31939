pub mod astar;
pub mod dijkstra;
pub mod search_result;
