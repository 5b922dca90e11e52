// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generic flume-backed event bus.

/// A generic, thread-safe event channel.
///
/// The bus is generic over the event type `T` so the core stays decoupled
/// from the event sets defined by higher layers. Its main consumer here is
/// the pressure monitor's error observer: the tracking subsystem's event
/// surface publishes into the bus, and the monitor drains a subscription at
/// each tick.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new bus backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Publishes an event, logging an error if every subscriber is gone.
    pub fn publish(&self, event: T) {
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to publish event: {e}. All subscribers disconnected.");
        }
    }

    /// Returns a sender end for collaborators that emit events.
    pub fn emitter(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a new subscription on the bus.
    ///
    /// Subscriptions share the underlying channel: each event is consumed by
    /// exactly one subscriber, which fits the single-observer pattern the
    /// engine uses.
    pub fn subscribe(&self) -> flume::Receiver<T> {
        self.receiver.clone()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
