//! The body arena and the fixed-substep world step

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::body::{Body, BodyHandle, BodyOptions, Shape};
use super::bounds::Bounds;
use super::collision::collide;
use super::vector::Vector2;
use crate::consts::PALETTE;
use crate::error::{Result, SimError};
use crate::settings::WorldSettings;

/// Read-only view of a body for rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodyView<'a> {
    pub handle: BodyHandle,
    pub shape: &'a Shape,
    pub color: &'a str,
    pub is_static: bool,
}

impl<'a> From<&'a Body> for BodyView<'a> {
    fn from(body: &'a Body) -> Self {
        Self {
            handle: body.handle,
            shape: &body.shape,
            color: &body.color,
            is_static: body.is_static,
        }
    }
}

/// Owns every body and advances them together.
///
/// Bodies are stored sorted by handle, so iteration order (and therefore
/// collision order) is stable across runs with the same seed.
#[derive(Debug, Clone)]
pub struct World {
    settings: WorldSettings,
    bodies: Vec<Body>,
    rng: Pcg32,
    next_id: u32,
    /// Completed `step` calls
    ticks: u64,
    /// Pairs resolved during the last `step`, summed over substeps
    last_contacts: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldSettings::default())
    }
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            bodies: Vec::new(),
            next_id: 1,
            ticks: 0,
            last_contacts: 0,
        }
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    fn next_handle(&mut self) -> Result<BodyHandle> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(SimError::HandlesExhausted)?;
        let handle = BodyHandle(self.next_id);
        self.next_id = next;
        Ok(handle)
    }

    /// Fill in the per-world defaults the caller left out
    fn resolve_options(&mut self, mut options: BodyOptions, restitution: f64) -> BodyOptions {
        options.restitution.get_or_insert(restitution);
        if options.color.is_none() {
            let pick = self.rng.random_range(0..PALETTE.len());
            options.color = Some(PALETTE[pick].to_string());
        }
        options
    }

    /// Spawn a circle of `radius` centered at (`x`, `y`)
    pub fn spawn_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        options: BodyOptions,
    ) -> Result<BodyHandle> {
        let options = self.resolve_options(options, self.settings.circle_restitution);
        let material = self.settings.material;
        let body = Body::circle(
            BodyHandle(self.next_id),
            Vector2::new(x, y),
            radius,
            options,
            &material,
        )?;
        self.insert(body)
    }

    /// Spawn a `width` x `height` rectangle centered at (`x`, `y`)
    pub fn spawn_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: BodyOptions,
    ) -> Result<BodyHandle> {
        let options = self.resolve_options(options, self.settings.rectangle_restitution);
        let material = self.settings.material;
        let body = Body::rectangle(
            BodyHandle(self.next_id),
            Vector2::new(x, y),
            width,
            height,
            options,
            &material,
        )?;
        self.insert(body)
    }

    /// Handles are only consumed once construction succeeded
    fn insert(&mut self, mut body: Body) -> Result<BodyHandle> {
        let handle = self.next_handle()?;
        body.handle = handle;
        log::debug!(
            "Spawned {} {:?} at {:?}",
            if body.shape.is_circle() { "circle" } else { "rectangle" },
            handle,
            body.centroid()
        );
        self.bodies.push(body);
        Ok(handle)
    }

    /// Advance the simulation by `delta_ms`, split into equal substeps.
    ///
    /// Each substep integrates every body, then runs broad-phase filtered
    /// all-pairs detection, separation and impulse response.
    pub fn step(&mut self, delta_ms: f64) {
        let sub_steps = self.settings.sub_steps.max(1);
        let dt = delta_ms / f64::from(sub_steps);
        let gravity = self.settings.gravity;

        let mut contacts = 0;
        for _ in 0..sub_steps {
            for body in &mut self.bodies {
                body.integrate(gravity, dt);
            }
            contacts += self.resolve_contacts();
        }

        self.ticks += 1;
        self.last_contacts = contacts;
        log::trace!(
            "Tick {}: {} bodies, {} contacts over {} substeps",
            self.ticks,
            self.bodies.len(),
            contacts,
            sub_steps
        );
    }

    /// One pass over every unordered pair `(i, j)` with `i < j`
    fn resolve_contacts(&mut self) -> usize {
        let mut contacts = 0;
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if collide(a, b) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Visit every body in handle order
    pub fn for_each_body<F>(&self, mut visitor: F)
    where
        F: FnMut(BodyView<'_>),
    {
        for body in &self.bodies {
            visitor(BodyView::from(body));
        }
    }

    /// Render views of every body, in handle order
    pub fn snapshot(&self) -> Vec<BodyView<'_>> {
        self.bodies.iter().map(BodyView::from).collect()
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.binary_search_by_key(&handle, |b| b.handle).ok()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.index_of(handle).map(|i| &self.bodies[i])
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.index_of(handle).map(|i| &mut self.bodies[i])
    }

    /// Remove a single body. Returns false for unknown handles.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        match self.index_of(handle) {
            Some(i) => {
                self.bodies.remove(i);
                log::debug!("Removed {:?}", handle);
                true
            }
            None => false,
        }
    }

    /// Remove every body whose bounds lie entirely outside the viewport
    /// `[0, width] x [0, height]`. Candidates are collected first and deleted
    /// afterwards, so no body is skipped.
    pub fn remove_offscreen(&mut self, width: f64, height: f64) -> Vec<BodyHandle> {
        let removed: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|b| Bounds::of(b).is_outside(width, height))
            .map(|b| b.handle)
            .collect();

        if !removed.is_empty() {
            self.bodies.retain(|b| !removed.contains(&b.handle));
            log::debug!("Culled {} offscreen bodies", removed.len());
        }

        removed
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_contacts(&self) -> usize {
        self.last_contacts
    }
}
