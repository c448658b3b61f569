pub mod analytics_service;
pub mod menu_service;
pub mod order_service;
pub mod recommendation_service;
