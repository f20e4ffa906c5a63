use ash::vk::{self, Handle};
use metavk_core::config::{parse_api_version, LoaderConfig};
use metavk_registry::{
    DeviceSymbols, DeviceTable, GlobalSlots, InstanceSymbols, InstanceTable, LoaderTable, Profile,
};
use tracing::{debug, info, warn};

use crate::error::LoaderError;
use crate::library::VulkanLibrary;

/// How a [`Loader`] finds the library and which entry points it loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    pub profile: Profile,
    /// Library candidates in search order (None = platform defaults)
    pub library_names: Option<Vec<String>>,
    /// Reject `load_device` for a second, different device
    pub strict_single_device: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            profile: Profile::all(),
            library_names: None,
            strict_single_device: false,
        }
    }
}

impl LoaderOptions {
    pub fn from_config(config: &LoaderConfig) -> Result<Self, LoaderError> {
        let (major, minor) = parse_api_version(&config.profile.api_version)?;
        let api_version = vk::make_api_version(0, major, minor, 0);
        let profile = match config.profile.extensions {
            Some(ref extensions) => Profile::core(api_version).with_extensions(extensions.iter().cloned()),
            None => Profile::all().with_api_version(api_version),
        };

        Ok(Self {
            profile,
            library_names: config.library_candidates(),
            strict_single_device: config.loader.strict_single_device,
        })
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_library_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn strict_single_device(mut self, strict: bool) -> Self {
        self.strict_single_device = strict;
        self
    }
}

/// Loader context: the slots, the library they point into, and the handles
/// they were last loaded from.
///
/// Slots go from null to set during a load call and back to null on
/// [`finalize`](Loader::finalize). A slot left null after loading means the
/// driver does not provide the entry point or the profile excludes it; check
/// before calling.
pub struct Loader {
    options: LoaderOptions,
    slots: GlobalSlots,
    /// Raw handles of the last global loads (0 = none)
    instance: u64,
    device: u64,
    library: Option<VulkanLibrary>,
}

impl Loader {
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            slots: GlobalSlots::default(),
            instance: 0,
            device: 0,
            library: None,
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next initialize or load call.
    pub fn set_options(&mut self, options: LoaderOptions) {
        self.options = options;
    }

    pub fn profile(&self) -> &Profile {
        &self.options.profile
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Open the platform loader library and load the loader-level entry points.
    ///
    /// On failure every slot is null.
    ///
    /// # Safety
    /// Opening a library runs its initialisers, and the library's
    /// `vkGetInstanceProcAddr` is called with a null instance. The configured
    /// candidates must name genuine Vulkan loaders.
    pub unsafe fn initialize(&mut self) -> Result<(), LoaderError> {
        self.reset();

        let library = match self.options.library_names {
            Some(ref names) => unsafe { VulkanLibrary::open(names)? },
            None => unsafe { VulkanLibrary::open_default()? },
        };
        let get_instance_proc_addr = library.get_instance_proc_addr();
        self.library = Some(library);
        unsafe { self.load_loader_level(get_instance_proc_addr) };
        Ok(())
    }

    /// Like [`initialize`](Loader::initialize), but with a caller-supplied
    /// `vkGetInstanceProcAddr` instead of opening a library.
    ///
    /// # Safety
    /// `handler` must behave like `vkGetInstanceProcAddr`: every pointer it
    /// returns for a name must have that entry point's signature, and it must
    /// stay valid until [`finalize`](Loader::finalize) or the next initialize.
    pub unsafe fn initialize_custom(&mut self, handler: vk::PFN_vkGetInstanceProcAddr) {
        self.reset();
        unsafe { self.load_loader_level(handler) };
    }

    /// Reset every slot to null, forget the loaded handles and release the library.
    pub fn finalize(&mut self) {
        if let Some(ref library) = self.library {
            info!("releasing Vulkan loader {}", library.name());
        }
        self.reset();
    }

    fn reset(&mut self) {
        // Slots point into the library: clear them before dropping it.
        self.slots.clear();
        self.instance = 0;
        self.device = 0;
        self.library = None;
    }

    unsafe fn load_loader_level(&mut self, get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr) {
        self.slots.vkGetInstanceProcAddr = Some(get_instance_proc_addr);
        let source = InstanceSymbols::loader(get_instance_proc_addr);
        let resolved = unsafe { self.slots.loader.load(&self.options.profile, &source) };
        debug!(resolved, "loaded loader-level entry points");
    }

    pub fn is_initialized(&self) -> bool {
        self.slots.vkGetInstanceProcAddr.is_some()
    }

    /// Name of the opened library; None before initialize or with a custom handler.
    pub fn library_name(&self) -> Option<&str> {
        self.library.as_ref().map(VulkanLibrary::name)
    }

    // ── Version ─────────────────────────────────────────────────

    /// Instance-level API version the loader supports, or 0 when unknown.
    ///
    /// Asks `vkEnumerateInstanceVersion` when it is loaded; a loader that only
    /// has `vkCreateInstance` predates 1.1 and reports 1.0.
    pub fn instance_version(&self) -> u32 {
        if let Some(enumerate_instance_version) = self.slots.loader.vkEnumerateInstanceVersion {
            let mut api_version = 0;
            if unsafe { enumerate_instance_version(&mut api_version) } == vk::Result::SUCCESS {
                return api_version;
            }
        }

        if self.slots.loader.vkCreateInstance.is_some() {
            return vk::API_VERSION_1_0;
        }

        0
    }

    // ── Global loading ──────────────────────────────────────────

    fn seed(&self) -> Result<vk::PFN_vkGetInstanceProcAddr, LoaderError> {
        self.slots
            .vkGetInstanceProcAddr
            .ok_or(LoaderError::NotInitialized)
    }

    fn get_device_proc_addr(&self) -> Result<vk::PFN_vkGetDeviceProcAddr, LoaderError> {
        self.seed()?;
        self.slots
            .instance
            .vkGetDeviceProcAddr
            .ok_or(LoaderError::MissingSymbol("vkGetDeviceProcAddr"))
    }

    /// Load instance-level and device-level entry points through `instance`.
    ///
    /// Device-level pointers obtained this way dispatch through the loader
    /// and work for every device created from the instance.
    ///
    /// # Safety
    /// `instance` must be a valid instance created through this loader's
    /// `vkCreateInstance`, and must outlive every use of the loaded slots.
    pub unsafe fn load_instance(&mut self, instance: vk::Instance) -> Result<(), LoaderError> {
        let source = InstanceSymbols::new(self.seed()?, instance);
        let profile = &self.options.profile;
        let instance_level = unsafe { self.slots.instance.load(profile, &source) };
        let device_level = unsafe { self.slots.device.load(profile, &source) };
        self.instance = instance.as_raw();
        debug!(
            instance = instance.as_raw(),
            instance_level, device_level, "loaded instance entry points"
        );
        Ok(())
    }

    /// Load only the instance-level entry points through `instance`.
    ///
    /// # Safety
    /// Same requirements as [`load_instance`](Loader::load_instance).
    pub unsafe fn load_instance_only(&mut self, instance: vk::Instance) -> Result<(), LoaderError> {
        let source = InstanceSymbols::new(self.seed()?, instance);
        let resolved = unsafe { self.slots.instance.load(&self.options.profile, &source) };
        self.instance = instance.as_raw();
        debug!(instance = instance.as_raw(), resolved, "loaded instance-only entry points");
        Ok(())
    }

    /// Load device-level entry points directly from `device`.
    ///
    /// The resulting pointers are only valid for `device`. Applications with
    /// several live devices should use [`load_device_table`](Loader::load_device_table).
    ///
    /// # Safety
    /// `device` must be a valid device created from the instance last passed
    /// to an instance load, and must outlive every use of the device slots.
    pub unsafe fn load_device(&mut self, device: vk::Device) -> Result<(), LoaderError> {
        let get_device_proc_addr = self.get_device_proc_addr()?;

        let requested = device.as_raw();
        if self.device != 0 && self.device != requested {
            if self.options.strict_single_device {
                return Err(LoaderError::DeviceAlreadyLoaded {
                    loaded: self.device,
                    requested,
                });
            }
            warn!(
                loaded = self.device,
                requested, "replacing global device entry points with a second device"
            );
        }

        let source = DeviceSymbols::new(get_device_proc_addr, device);
        let resolved = unsafe { self.slots.device.load(&self.options.profile, &source) };
        self.device = requested;
        debug!(device = requested, resolved, "loaded device entry points");
        Ok(())
    }

    // ── Caller-owned tables ─────────────────────────────────────

    /// Fill `table` with instance-level entry points for `instance`.
    /// Returns the number of resolved slots.
    ///
    /// # Safety
    /// `instance` must be a valid instance created through this loader.
    pub unsafe fn load_instance_table(
        &self,
        table: &mut InstanceTable,
        instance: vk::Instance,
    ) -> Result<usize, LoaderError> {
        let source = InstanceSymbols::new(self.seed()?, instance);
        Ok(unsafe { table.load(&self.options.profile, &source) })
    }

    /// Fill `table` with device-level entry points for `device`.
    /// Returns the number of resolved slots.
    ///
    /// # Safety
    /// `device` must be a valid device created through this loader.
    pub unsafe fn load_device_table(
        &self,
        table: &mut DeviceTable,
        device: vk::Device,
    ) -> Result<usize, LoaderError> {
        let source = DeviceSymbols::new(self.get_device_proc_addr()?, device);
        Ok(unsafe { table.load(&self.options.profile, &source) })
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Instance passed to the last global instance load (null if none).
    pub fn loaded_instance(&self) -> vk::Instance {
        vk::Instance::from_raw(self.instance)
    }

    /// Device passed to the last global device load (null if none).
    pub fn loaded_device(&self) -> vk::Device {
        vk::Device::from_raw(self.device)
    }

    pub fn slots(&self) -> &GlobalSlots {
        &self.slots
    }

    pub fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr> {
        self.slots.vkGetInstanceProcAddr
    }

    pub fn loader_table(&self) -> &LoaderTable {
        &self.slots.loader
    }

    pub fn instance_table(&self) -> &InstanceTable {
        &self.slots.instance
    }

    pub fn device_table(&self) -> &DeviceTable {
        &self.slots.device
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("library", &self.library_name())
            .field("instance", &format_args!("{:#x}", self.instance))
            .field("device", &format_args!("{:#x}", self.device))
            .field("slots", &self.slots)
            .finish()
    }
}
