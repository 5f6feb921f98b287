pub mod analysis; // Gemini client, orchestrator, grounded chat
pub mod api; // HTTP surface
pub mod config;
pub mod core_state; // Report phase slot + chat session
pub mod models; // Analysis result data model
pub mod render; // Gauges, grouping, status tiers, dashboard view
pub mod web; // Embedded dashboard page
