//! Phase-aware DNS failover controller for an HAProxy pair.
//!
//! Keeps a single Route 53 A-record pointed at the first healthy node of a
//! primary/secondary HAProxy pair fronting a Kubernetes cluster. Which health
//! check applies depends on the cluster lifecycle phase stored in SSM
//! Parameter Store: before the cluster is initialized only raw reachability
//! can be tested, afterwards the apiserver liveness endpoint is authoritative.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌─────────────────────────────────────────────────┐
//!                   │              FAILOVER CONTROLLER                │
//!                   │                                                 │
//!   Lambda event ───┼─▶ controller ──▶ params ──▶ SSM GetParameter    │
//!                   │       │          (phase)                        │
//!                   │       ▼                                         │
//!                   │    decider ────▶ health ──▶ TCP connect / HTTPS │
//!                   │   (primary,      (probe)    GET per candidate   │
//!                   │    secondary)                                   │
//!                   │       │                                         │
//!                   │       ▼                                         │
//!   JSON outcome ◀──┼─── dns ────────▶ Route 53 UPSERT (A, TTL 60)    │
//!                   │                                                 │
//!                   │  Cross-cutting: config (env), tracing, errors   │
//!                   └─────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation is stateless and sequential: one phase read, at most one
//! probe per candidate in priority order, at most one DNS mutation. Nothing
//! survives the invocation except the DNS record itself.

// Core decision engine
pub mod decider;
pub mod health;
pub mod phase;

// I/O adapters
pub mod dns;
pub mod params;

// Orchestration
pub mod controller;

// Cross-cutting concerns
pub mod config;
