//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the core thread.
//
// This module defines the contract between platform implementations and
// the game thread, so a platform backend can be swapped without touching
// the router.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side drain into one ordered input list per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
