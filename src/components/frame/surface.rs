//! Runs the reducer against an injected [`CommandExecutor`].
//!
//! The surface is the only owner of the interaction state. Components and
//! tests feed it [`FrameEvent`]s and observe the state through subscriptions.

use std::collections::VecDeque;

use log::{debug, warn};

use super::command::{CommandExecutor, Created};
use super::policy::InteractionPolicy;
use super::reducer::{FrameEvent, Transition, reduce};
use super::state::InteractionState;
use super::types::View;

/// Handle returned by [`InteractionSurface::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&InteractionState)>;

/// Interaction state plus the executor that applies its commands.
pub struct InteractionSurface<E> {
	state: InteractionState,
	policy: InteractionPolicy,
	executor: E,
	listeners: Vec<(SubscriptionId, Listener)>,
	next_subscription: u64,
}

impl<E: CommandExecutor> InteractionSurface<E> {
	/// Surface with the default policy.
	pub fn new(executor: E) -> Self {
		Self::with_policy(executor, InteractionPolicy::default())
	}

	/// Surface with an explicit policy.
	pub fn with_policy(executor: E, policy: InteractionPolicy) -> Self {
		Self {
			state: InteractionState::default(),
			policy,
			executor,
			listeners: Vec::new(),
			next_subscription: 0,
		}
	}

	/// Current interaction state.
	pub fn state(&self) -> &InteractionState {
		&self.state
	}

	/// Policy the reducer runs with.
	pub fn policy(&self) -> InteractionPolicy {
		self.policy
	}

	/// The injected executor.
	pub fn executor(&self) -> &E {
		&self.executor
	}

	/// Mutable access to the injected executor.
	pub fn executor_mut(&mut self) -> &mut E {
		&mut self.executor
	}

	/// Handle one event and everything it causes.
	///
	/// Ids returned by the executor for create commands are fed back as
	/// follow-up events before this returns. Listeners run once at the end if
	/// the state changed or any command was executed.
	pub fn dispatch(&mut self, event: FrameEvent) {
		let mut queue = VecDeque::from([event]);
		let mut dirty = false;

		while let Some(event) = queue.pop_front() {
			debug!("node-frame: {:?}", event);
			let Transition { state, commands } = reduce(&self.state, event, &self.policy);
			dirty |= state != self.state || !commands.is_empty();
			self.state = state;

			for command in commands {
				let created = command.creates();
				match (created, self.executor.execute(command)) {
					(Some(Created::Node), Some(id)) => queue.push_back(FrameEvent::NodeCreated { id }),
					(Some(Created::Link), Some(id)) => queue.push_back(FrameEvent::LinkCreated { id }),
					(Some(kind), None) => {
						warn!("node-frame: executor returned no id for new {:?}", kind)
					}
					(None, _) => {}
				}
			}
		}

		if dirty {
			self.notify();
		}
	}

	/// Drop ids that are gone from `view`, notifying listeners if any were.
	pub fn sync_view(&mut self, view: &View) {
		if self.state.prune(view) {
			debug!("node-frame: pruned stale ids");
			self.notify();
		}
	}

	/// Call `listener` after every dispatch that changed something.
	pub fn subscribe(&mut self, listener: impl Fn(&InteractionState) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_subscription);
		self.next_subscription += 1;
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Returns false if `id` was not subscribed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let len = self.listeners.len();
		self.listeners.retain(|(sub, _)| *sub != id);
		self.listeners.len() != len
	}

	fn notify(&self) {
		for (_, listener) in &self.listeners {
			listener(&self.state);
		}
	}
}
