//! The connection: one bus handle, its lifecycle, and the control surface.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cec_adapter::{
    AdapterDriver, AdapterInfo, BusHandle, EventSink, HandleConfig,
    ADAPTER_ENUMERATION_LIMIT,
};
use cec_event_manager::{DispatcherConfig, EventDispatcher, EventQueueReader};
use cec_protocol::{codec, Command, DeviceType, KeyPress, LogicalAddress, SourceActivation};
use parking_lot::Mutex;

use crate::error::{ConnectionError, Result};
use crate::lifecycle::LifecycleState;

/// Pause between the press and release halves of [`Connection::key`].
///
/// Remote devices debounce their inputs; releasing immediately after the
/// press makes some of them miss the key entirely. The delay is a timing
/// contract with the device, not slack.
pub const KEY_SETTLE_DELAY: Duration = Duration::from_millis(10);

struct Inner {
    handle: Box<dyn BusHandle>,
    state: LifecycleState,
}

impl Inner {
    fn require(&self, operation: &'static str, required: LifecycleState) -> Result<()> {
        if self.state != required {
            return Err(ConnectionError::InvalidState {
                operation,
                required,
                actual: self.state,
            });
        }
        Ok(())
    }

    fn advance(&mut self, next: LifecycleState) {
        debug_assert!(self.state.can_advance_to(next), "illegal lifecycle transition");
        tracing::debug!(from = %self.state, to = %next, "connection state change");
        self.state = next;
    }
}

/// A live attachment to the control bus.
///
/// Owns exactly one underlying bus handle; two connections never share a
/// handle. The handle is guarded by a mutex because it is not safe for
/// concurrent use: control operations from multiple threads serialize
/// here, one blocking driver call in flight at a time.
///
/// The five event queues filled by the driver are exposed through the
/// reader accessors ([`messages`](Connection::messages),
/// [`commands`](Connection::commands), …).
pub struct Connection {
    inner: Mutex<Inner>,
    dispatcher: Arc<EventDispatcher>,
    config: HandleConfig,
}

impl Connection {
    /// Create a connection with the given OSD device name and default
    /// queue capacities.
    ///
    /// Registers this connection's own dispatcher as the driver's event
    /// sink and requests a fresh handle. Fails with
    /// [`ConnectionError::InitializationFailed`] when the driver cannot
    /// produce one.
    pub fn initialize<D: AdapterDriver>(driver: &D, device_name: &str) -> Result<Self> {
        Self::with_config(driver, HandleConfig::new(device_name), DispatcherConfig::default())
    }

    /// Create a connection with explicit handle and dispatcher
    /// configuration.
    pub fn with_config<D: AdapterDriver>(
        driver: &D,
        config: HandleConfig,
        dispatcher_config: DispatcherConfig,
    ) -> Result<Self> {
        let dispatcher = Arc::new(EventDispatcher::with_config(dispatcher_config)?);
        let sink: Arc<dyn EventSink> = Arc::clone(&dispatcher) as Arc<dyn EventSink>;
        let handle = driver
            .initialize(&config, sink)
            .map_err(ConnectionError::InitializationFailed)?;
        tracing::debug!(device_name = %config.device_name, "bus handle initialised");
        Ok(Self {
            inner: Mutex::new(Inner {
                handle,
                state: LifecycleState::Initialized,
            }),
            dispatcher,
            config,
        })
    }

    /// The connection's current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.inner.lock().state
    }

    /// The registration configuration this connection was built with.
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Select an adapter whose path or communication id contains `hint`.
    ///
    /// Enumeration is capped at [`ADAPTER_ENUMERATION_LIMIT`] entries and
    /// the first match wins. An empty hint is accepted only when exactly
    /// one candidate exists; with several candidates it is ambiguous and
    /// fails with [`ConnectionError::NoAdapterFound`].
    pub fn discover_adapter(&self, hint: &str) -> Result<AdapterInfo> {
        let mut inner = self.inner.lock();
        if inner.state != LifecycleState::Initialized
            && inner.state != LifecycleState::AdapterFound
        {
            return Err(ConnectionError::InvalidState {
                operation: "discover_adapter",
                required: LifecycleState::Initialized,
                actual: inner.state,
            });
        }

        let adapters = inner.handle.find_adapters(ADAPTER_ENUMERATION_LIMIT);
        tracing::info!(count = adapters.len(), "adapter enumeration complete");
        for (index, adapter) in adapters.iter().enumerate() {
            tracing::debug!(index, path = %adapter.path, comm = %adapter.comm, "adapter candidate");
        }

        let selected = if hint.is_empty() {
            match adapters.as_slice() {
                [only] => Some(only.clone()),
                _ => None,
            }
        } else {
            adapters
                .iter()
                .find(|adapter| adapter.path.contains(hint) || adapter.comm.contains(hint))
                .cloned()
        };

        match selected {
            Some(adapter) => {
                inner.advance(LifecycleState::AdapterFound);
                Ok(adapter)
            }
            None => Err(ConnectionError::NoAdapterFound {
                hint: hint.to_string(),
            }),
        }
    }

    /// Open the selected adapter with a connect timeout.
    ///
    /// Initializes standalone video signaling first, then opens the
    /// adapter's communication endpoint. Fails with
    /// [`ConnectionError::OpenFailed`] on a rejected open; on success the
    /// connection is active and control operations become available.
    pub fn open(&self, adapter: &AdapterInfo, timeout: Duration) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("open", LifecycleState::AdapterFound)?;

        inner.handle.init_video_standalone();
        inner
            .handle
            .open(&adapter.comm, timeout)
            .map_err(|source| ConnectionError::OpenFailed {
                comm: adapter.comm.clone(),
                source,
            })?;
        inner.advance(LifecycleState::Opened);
        inner.advance(LifecycleState::Active);
        tracing::info!(comm = %adapter.comm, "adapter open, connection active");
        Ok(())
    }

    /// Parse wire text and put the frame on the bus.
    ///
    /// Fire-and-forget: no application-level acknowledgement is awaited.
    /// If the addressed device answers, the answer surfaces later as an
    /// inbound event on the command queue; correlating the two is the
    /// caller's business.
    pub fn transmit(&self, wire_text: &str) -> Result<()> {
        let command = codec::parse(wire_text)?;
        self.transmit_command(&command)
    }

    /// Put an already-built frame on the bus.
    pub fn transmit_command(&self, command: &Command) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("transmit", LifecycleState::Active)?;
        tracing::debug!(command = %command, "transmit");
        inner
            .handle
            .transmit(command)
            .map_err(ConnectionError::TransmitFailed)
    }

    /// Power on the device at `address`.
    pub fn power_on(&self, address: LogicalAddress) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("power_on", LifecycleState::Active)?;
        inner
            .handle
            .power_on(address)
            .map_err(|source| ConnectionError::PowerOnFailed { address, source })
    }

    /// Put the device at `address` into standby.
    pub fn standby(&self, address: LogicalAddress) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("standby", LifecycleState::Active)?;
        inner
            .handle
            .standby(address)
            .map_err(|source| ConnectionError::StandbyFailed { address, source })
    }

    /// Send a volume-up command to the audio system.
    pub fn volume_up(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("volume_up", LifecycleState::Active)?;
        inner
            .handle
            .volume_up()
            .map_err(ConnectionError::VolumeUpFailed)
    }

    /// Send a volume-down command to the audio system.
    pub fn volume_down(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("volume_down", LifecycleState::Active)?;
        inner
            .handle
            .volume_down()
            .map_err(ConnectionError::VolumeDownFailed)
    }

    /// Toggle mute on the audio system.
    pub fn mute(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("mute", LifecycleState::Active)?;
        inner.handle.mute().map_err(ConnectionError::MuteFailed)
    }

    /// Claim the active-source role as the given device type.
    pub fn set_active_source(&self, device_type: DeviceType) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("set_active_source", LifecycleState::Active)?;
        inner
            .handle
            .set_active_source(device_type)
            .map_err(ConnectionError::SetActiveSourceFailed)
    }

    /// Ask the adapter to re-probe the bus for devices.
    pub fn rescan_devices(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("rescan_devices", LifecycleState::Active)?;
        inner
            .handle
            .rescan_devices()
            .map_err(ConnectionError::RescanFailed)
    }

    /// Show a text message on the device at `address`.
    pub fn set_osd_string(&self, address: LogicalAddress, text: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("set_osd_string", LifecycleState::Active)?;
        inner
            .handle
            .set_osd_string(address, text)
            .map_err(|source| ConnectionError::SetOsdStringFailed { address, source })
    }

    /// Poll the device at `address`; `Ok(true)` when it acknowledged.
    pub fn poll_device(&self, address: LogicalAddress) -> Result<bool> {
        let mut inner = self.inner.lock();
        inner.require("poll_device", LifecycleState::Active)?;
        inner
            .handle
            .poll_device(address)
            .map_err(|source| ConnectionError::PollFailed { address, source })
    }

    /// Assert a virtual key on the device at `address`.
    pub fn key_press(&self, address: LogicalAddress, code: u8) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("key_press", LifecycleState::Active)?;
        inner
            .handle
            .send_key_press(address, code)
            .map_err(|source| ConnectionError::KeyPressFailed { address, source })
    }

    /// Release the currently asserted virtual key on `address`.
    pub fn key_release(&self, address: LogicalAddress) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.require("key_release", LifecycleState::Active)?;
        inner
            .handle
            .send_key_release(address)
            .map_err(|source| ConnectionError::KeyReleaseFailed { address, source })
    }

    /// Press and release a virtual key with the settle delay in between.
    ///
    /// The release is attempted even when the press fails: a stuck
    /// "pressed" state on the bus is worse than a harmless extra release.
    /// When both halves fail the press error is reported. The calling
    /// thread blocks for [`KEY_SETTLE_DELAY`] between the two calls.
    pub fn key(&self, address: LogicalAddress, code: u8) -> Result<()> {
        let press = self.key_press(address, code);
        thread::sleep(KEY_SETTLE_DELAY);
        let release = self.key_release(address);
        press.and(release)
    }

    /// Reader for driver log messages.
    pub fn messages(&self) -> EventQueueReader<String> {
        self.dispatcher.messages()
    }

    /// Reader for remote key presses.
    pub fn key_presses(&self) -> EventQueueReader<KeyPress> {
        self.dispatcher.key_presses()
    }

    /// Reader for decoded inbound commands.
    pub fn commands(&self) -> EventQueueReader<Command> {
        self.dispatcher.commands()
    }

    /// Reader for source activation notices.
    pub fn source_activations(&self) -> EventQueueReader<SourceActivation> {
        self.dispatcher.source_activations()
    }

    /// Reader for menu activation state; `true` means activated.
    pub fn menu_activations(&self) -> EventQueueReader<bool> {
        self.dispatcher.menu_activations()
    }

    /// Events lost to queue overflow since this connection was created.
    pub fn dropped_events(&self) -> u64 {
        self.dispatcher.dropped_events()
    }

    /// Tear the connection down and release the underlying handle.
    ///
    /// Consuming `self` makes a second teardown unrepresentable, since the
    /// underlying release primitive is not idempotent. Event readers
    /// obtained earlier keep draining whatever is still queued and then
    /// report disconnection.
    pub fn destroy(self) {
        let mut inner = self.inner.into_inner();
        inner.advance(LifecycleState::Destroyed);
        inner.handle.destroy();
        tracing::debug!("connection destroyed");
    }

    pub(crate) fn with_handle<R>(&self, operation: &'static str, f: impl FnOnce(&mut dyn BusHandle) -> R) -> Result<R> {
        let mut inner = self.inner.lock();
        inner.require(operation, LifecycleState::Active)?;
        Ok(f(inner.handle.as_mut()))
    }
}
