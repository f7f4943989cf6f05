//! # Random Index Providers
//!
//! File: cli/src/selector/random.rs
//!
//! ## Overview
//!
//! The fallback phase of the selector needs one uniformly chosen index into
//! the fallback pool. That choice is injected through the `IndexSource`
//! trait so the selector stays free of any global RNG, and so tests can
//! substitute a provider whose output is known in advance.
//!
//! ## Providers
//!
//! - `ThreadRngSource`: uniform, backed by `rand::thread_rng()`. The default.
//! - `SeededSource`: uniform but reproducible, backed by a seeded `StdRng`.
//! - `FixedIndex`: always the same index (wrapped into range).
//! - `CycleIndex`: 0, 1, 2, ... wrapped into range.
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A capability that picks an index in `0..len`.
///
/// Callers guarantee `len > 0`; implementations must return a value `< len`.
pub trait IndexSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded generator. Two sources built from the same
/// seed produce the same sequence of picks.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexSource for SeededSource {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always picks the same index, wrapped into `0..len`.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Picks 0, 1, 2, ... on successive calls, wrapped into `0..len`.
#[derive(Debug, Default)]
pub struct CycleIndex {
    next: AtomicUsize,
}

impl CycleIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexSource for CycleIndex {
    fn pick(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

impl<T: IndexSource + ?Sized> IndexSource for Box<T> {
    fn pick(&self, len: usize) -> usize {
        (**self).pick(len)
    }
}
