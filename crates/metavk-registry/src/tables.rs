//! The entry-point registry.
//!
//! Grouped by tier, then by the version or extension that introduces the
//! entry point; names are sorted within each group. Commands promoted to core
//! keep their suffixed alias rows under the extension and share the core
//! command's PFN type.

use ash::vk;

use crate::requires::{ext, Requires, V1_0, V1_1, V1_2, V1_3};

/// Every slot the loader can populate, including the seed lookup function.
#[allow(non_snake_case)]
#[derive(Clone, Copy, Default)]
pub struct GlobalSlots {
    /// Seed obtained from the platform library or supplied by the caller.
    pub vkGetInstanceProcAddr: Option<vk::PFN_vkGetInstanceProcAddr>,
    pub loader: LoaderTable,
    pub instance: InstanceTable,
    pub device: DeviceTable,
}

impl GlobalSlots {
    /// Number of non-null slots across all tiers, seed included.
    pub fn resolved(&self) -> usize {
        usize::from(self.vkGetInstanceProcAddr.is_some())
            + self.loader.resolved()
            + self.instance.resolved()
            + self.device.resolved()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Debug for GlobalSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalSlots")
            .field("seed", &self.vkGetInstanceProcAddr.is_some())
            .field("loader", &self.loader)
            .field("instance", &self.instance)
            .field("device", &self.device)
            .finish()
    }
}

entry_point_table! {
    /// Entry points resolved with a null instance: instance creation and
    /// instance-level enumeration.
    pub struct LoaderTable: crate::requires::Level::Loader;

    V1_0 => {
        vkCreateInstance: PFN_vkCreateInstance,
        vkEnumerateInstanceExtensionProperties: PFN_vkEnumerateInstanceExtensionProperties,
        vkEnumerateInstanceLayerProperties: PFN_vkEnumerateInstanceLayerProperties,
    }
    V1_1 => {
        vkEnumerateInstanceVersion: PFN_vkEnumerateInstanceVersion,
    }
}

entry_point_table! {
    /// Entry points dispatched on an instance or physical device.
    pub struct InstanceTable: crate::requires::Level::Instance;

    V1_0 => {
        vkCreateDevice: PFN_vkCreateDevice,
        vkDestroyInstance: PFN_vkDestroyInstance,
        vkEnumerateDeviceExtensionProperties: PFN_vkEnumerateDeviceExtensionProperties,
        vkEnumerateDeviceLayerProperties: PFN_vkEnumerateDeviceLayerProperties,
        vkEnumeratePhysicalDevices: PFN_vkEnumeratePhysicalDevices,
        vkGetDeviceProcAddr: PFN_vkGetDeviceProcAddr,
        vkGetPhysicalDeviceFeatures: PFN_vkGetPhysicalDeviceFeatures,
        vkGetPhysicalDeviceFormatProperties: PFN_vkGetPhysicalDeviceFormatProperties,
        vkGetPhysicalDeviceImageFormatProperties: PFN_vkGetPhysicalDeviceImageFormatProperties,
        vkGetPhysicalDeviceMemoryProperties: PFN_vkGetPhysicalDeviceMemoryProperties,
        vkGetPhysicalDeviceProperties: PFN_vkGetPhysicalDeviceProperties,
        vkGetPhysicalDeviceQueueFamilyProperties: PFN_vkGetPhysicalDeviceQueueFamilyProperties,
        vkGetPhysicalDeviceSparseImageFormatProperties: PFN_vkGetPhysicalDeviceSparseImageFormatProperties,
    }
    V1_1 => {
        vkEnumeratePhysicalDeviceGroups: PFN_vkEnumeratePhysicalDeviceGroups,
        vkGetPhysicalDeviceExternalBufferProperties: PFN_vkGetPhysicalDeviceExternalBufferProperties,
        vkGetPhysicalDeviceExternalFenceProperties: PFN_vkGetPhysicalDeviceExternalFenceProperties,
        vkGetPhysicalDeviceExternalSemaphoreProperties: PFN_vkGetPhysicalDeviceExternalSemaphoreProperties,
        vkGetPhysicalDeviceFeatures2: PFN_vkGetPhysicalDeviceFeatures2,
        vkGetPhysicalDeviceFormatProperties2: PFN_vkGetPhysicalDeviceFormatProperties2,
        vkGetPhysicalDeviceImageFormatProperties2: PFN_vkGetPhysicalDeviceImageFormatProperties2,
        vkGetPhysicalDeviceMemoryProperties2: PFN_vkGetPhysicalDeviceMemoryProperties2,
        vkGetPhysicalDeviceProperties2: PFN_vkGetPhysicalDeviceProperties2,
        vkGetPhysicalDeviceQueueFamilyProperties2: PFN_vkGetPhysicalDeviceQueueFamilyProperties2,
        vkGetPhysicalDeviceSparseImageFormatProperties2: PFN_vkGetPhysicalDeviceSparseImageFormatProperties2,
    }
    V1_3 => {
        vkGetPhysicalDeviceToolProperties: PFN_vkGetPhysicalDeviceToolProperties,
    }
    ext("VK_EXT_acquire_xlib_display") => {
        vkAcquireXlibDisplayEXT: PFN_vkAcquireXlibDisplayEXT,
        vkGetRandROutputDisplayEXT: PFN_vkGetRandROutputDisplayEXT,
    }
    ext("VK_EXT_debug_report") => {
        vkCreateDebugReportCallbackEXT: PFN_vkCreateDebugReportCallbackEXT,
        vkDebugReportMessageEXT: PFN_vkDebugReportMessageEXT,
        vkDestroyDebugReportCallbackEXT: PFN_vkDestroyDebugReportCallbackEXT,
    }
    ext("VK_EXT_debug_utils") => {
        vkCreateDebugUtilsMessengerEXT: PFN_vkCreateDebugUtilsMessengerEXT,
        vkDestroyDebugUtilsMessengerEXT: PFN_vkDestroyDebugUtilsMessengerEXT,
        vkSubmitDebugUtilsMessageEXT: PFN_vkSubmitDebugUtilsMessageEXT,
    }
    ext("VK_EXT_direct_mode_display") => {
        vkReleaseDisplayEXT: PFN_vkReleaseDisplayEXT,
    }
    ext("VK_EXT_display_surface_counter") => {
        vkGetPhysicalDeviceSurfaceCapabilities2EXT: PFN_vkGetPhysicalDeviceSurfaceCapabilities2EXT,
    }
    ext("VK_EXT_sample_locations") => {
        vkGetPhysicalDeviceMultisamplePropertiesEXT: PFN_vkGetPhysicalDeviceMultisamplePropertiesEXT,
    }
    ext("VK_EXT_tooling_info") => {
        vkGetPhysicalDeviceToolPropertiesEXT: PFN_vkGetPhysicalDeviceToolProperties,
    }
    ext("VK_KHR_android_surface") => {
        vkCreateAndroidSurfaceKHR: PFN_vkCreateAndroidSurfaceKHR,
    }
    ext("VK_KHR_device_group_creation") => {
        vkEnumeratePhysicalDeviceGroupsKHR: PFN_vkEnumeratePhysicalDeviceGroups,
    }
    ext("VK_KHR_display") => {
        vkCreateDisplayModeKHR: PFN_vkCreateDisplayModeKHR,
        vkCreateDisplayPlaneSurfaceKHR: PFN_vkCreateDisplayPlaneSurfaceKHR,
        vkGetDisplayModePropertiesKHR: PFN_vkGetDisplayModePropertiesKHR,
        vkGetDisplayPlaneCapabilitiesKHR: PFN_vkGetDisplayPlaneCapabilitiesKHR,
        vkGetDisplayPlaneSupportedDisplaysKHR: PFN_vkGetDisplayPlaneSupportedDisplaysKHR,
        vkGetPhysicalDeviceDisplayPlanePropertiesKHR: PFN_vkGetPhysicalDeviceDisplayPlanePropertiesKHR,
        vkGetPhysicalDeviceDisplayPropertiesKHR: PFN_vkGetPhysicalDeviceDisplayPropertiesKHR,
    }
    ext("VK_KHR_external_fence_capabilities") => {
        vkGetPhysicalDeviceExternalFencePropertiesKHR: PFN_vkGetPhysicalDeviceExternalFenceProperties,
    }
    ext("VK_KHR_external_memory_capabilities") => {
        vkGetPhysicalDeviceExternalBufferPropertiesKHR: PFN_vkGetPhysicalDeviceExternalBufferProperties,
    }
    ext("VK_KHR_external_semaphore_capabilities") => {
        vkGetPhysicalDeviceExternalSemaphorePropertiesKHR: PFN_vkGetPhysicalDeviceExternalSemaphoreProperties,
    }
    ext("VK_KHR_get_physical_device_properties2") => {
        vkGetPhysicalDeviceFeatures2KHR: PFN_vkGetPhysicalDeviceFeatures2,
        vkGetPhysicalDeviceFormatProperties2KHR: PFN_vkGetPhysicalDeviceFormatProperties2,
        vkGetPhysicalDeviceImageFormatProperties2KHR: PFN_vkGetPhysicalDeviceImageFormatProperties2,
        vkGetPhysicalDeviceMemoryProperties2KHR: PFN_vkGetPhysicalDeviceMemoryProperties2,
        vkGetPhysicalDeviceProperties2KHR: PFN_vkGetPhysicalDeviceProperties2,
        vkGetPhysicalDeviceQueueFamilyProperties2KHR: PFN_vkGetPhysicalDeviceQueueFamilyProperties2,
        vkGetPhysicalDeviceSparseImageFormatProperties2KHR: PFN_vkGetPhysicalDeviceSparseImageFormatProperties2,
    }
    ext("VK_KHR_get_surface_capabilities2") => {
        vkGetPhysicalDeviceSurfaceCapabilities2KHR: PFN_vkGetPhysicalDeviceSurfaceCapabilities2KHR,
        vkGetPhysicalDeviceSurfaceFormats2KHR: PFN_vkGetPhysicalDeviceSurfaceFormats2KHR,
    }
    ext("VK_KHR_surface") => {
        vkDestroySurfaceKHR: PFN_vkDestroySurfaceKHR,
        vkGetPhysicalDeviceSurfaceCapabilitiesKHR: PFN_vkGetPhysicalDeviceSurfaceCapabilitiesKHR,
        vkGetPhysicalDeviceSurfaceFormatsKHR: PFN_vkGetPhysicalDeviceSurfaceFormatsKHR,
        vkGetPhysicalDeviceSurfacePresentModesKHR: PFN_vkGetPhysicalDeviceSurfacePresentModesKHR,
        vkGetPhysicalDeviceSurfaceSupportKHR: PFN_vkGetPhysicalDeviceSurfaceSupportKHR,
    }
    ext("VK_KHR_wayland_surface") => {
        vkCreateWaylandSurfaceKHR: PFN_vkCreateWaylandSurfaceKHR,
        vkGetPhysicalDeviceWaylandPresentationSupportKHR: PFN_vkGetPhysicalDeviceWaylandPresentationSupportKHR,
    }
    ext("VK_KHR_win32_surface") => {
        vkCreateWin32SurfaceKHR: PFN_vkCreateWin32SurfaceKHR,
        vkGetPhysicalDeviceWin32PresentationSupportKHR: PFN_vkGetPhysicalDeviceWin32PresentationSupportKHR,
    }
    ext("VK_KHR_xcb_surface") => {
        vkCreateXcbSurfaceKHR: PFN_vkCreateXcbSurfaceKHR,
        vkGetPhysicalDeviceXcbPresentationSupportKHR: PFN_vkGetPhysicalDeviceXcbPresentationSupportKHR,
    }
    ext("VK_KHR_xlib_surface") => {
        vkCreateXlibSurfaceKHR: PFN_vkCreateXlibSurfaceKHR,
        vkGetPhysicalDeviceXlibPresentationSupportKHR: PFN_vkGetPhysicalDeviceXlibPresentationSupportKHR,
    }
    ext("VK_MVK_ios_surface") => {
        vkCreateIOSSurfaceMVK: PFN_vkCreateIOSSurfaceMVK,
    }
    ext("VK_MVK_macos_surface") => {
        vkCreateMacOSSurfaceMVK: PFN_vkCreateMacOSSurfaceMVK,
    }
    ext("VK_NN_vi_surface") => {
        vkCreateViSurfaceNN: PFN_vkCreateViSurfaceNN,
    }
    ext("VK_NV_external_memory_capabilities") => {
        vkGetPhysicalDeviceExternalImageFormatPropertiesNV: PFN_vkGetPhysicalDeviceExternalImageFormatPropertiesNV,
    }
    Requires::Any(&[
        Requires::All(&[Requires::Extension("VK_KHR_device_group"), Requires::Extension("VK_KHR_surface")]),
        Requires::All(&[Requires::Extension("VK_KHR_swapchain"), V1_1]),
    ]) => {
        vkGetPhysicalDevicePresentRectanglesKHR: PFN_vkGetPhysicalDevicePresentRectanglesKHR,
    }
}

entry_point_table! {
    /// Entry points dispatched on a device, queue or command buffer.
    pub struct DeviceTable: crate::requires::Level::Device;

    V1_0 => {
        vkAllocateCommandBuffers: PFN_vkAllocateCommandBuffers,
        vkAllocateDescriptorSets: PFN_vkAllocateDescriptorSets,
        vkAllocateMemory: PFN_vkAllocateMemory,
        vkBeginCommandBuffer: PFN_vkBeginCommandBuffer,
        vkBindBufferMemory: PFN_vkBindBufferMemory,
        vkBindImageMemory: PFN_vkBindImageMemory,
        vkCmdBeginQuery: PFN_vkCmdBeginQuery,
        vkCmdBeginRenderPass: PFN_vkCmdBeginRenderPass,
        vkCmdBindDescriptorSets: PFN_vkCmdBindDescriptorSets,
        vkCmdBindIndexBuffer: PFN_vkCmdBindIndexBuffer,
        vkCmdBindPipeline: PFN_vkCmdBindPipeline,
        vkCmdBindVertexBuffers: PFN_vkCmdBindVertexBuffers,
        vkCmdBlitImage: PFN_vkCmdBlitImage,
        vkCmdClearAttachments: PFN_vkCmdClearAttachments,
        vkCmdClearColorImage: PFN_vkCmdClearColorImage,
        vkCmdClearDepthStencilImage: PFN_vkCmdClearDepthStencilImage,
        vkCmdCopyBuffer: PFN_vkCmdCopyBuffer,
        vkCmdCopyBufferToImage: PFN_vkCmdCopyBufferToImage,
        vkCmdCopyImage: PFN_vkCmdCopyImage,
        vkCmdCopyImageToBuffer: PFN_vkCmdCopyImageToBuffer,
        vkCmdCopyQueryPoolResults: PFN_vkCmdCopyQueryPoolResults,
        vkCmdDispatch: PFN_vkCmdDispatch,
        vkCmdDispatchIndirect: PFN_vkCmdDispatchIndirect,
        vkCmdDraw: PFN_vkCmdDraw,
        vkCmdDrawIndexed: PFN_vkCmdDrawIndexed,
        vkCmdDrawIndexedIndirect: PFN_vkCmdDrawIndexedIndirect,
        vkCmdDrawIndirect: PFN_vkCmdDrawIndirect,
        vkCmdEndQuery: PFN_vkCmdEndQuery,
        vkCmdEndRenderPass: PFN_vkCmdEndRenderPass,
        vkCmdExecuteCommands: PFN_vkCmdExecuteCommands,
        vkCmdFillBuffer: PFN_vkCmdFillBuffer,
        vkCmdNextSubpass: PFN_vkCmdNextSubpass,
        vkCmdPipelineBarrier: PFN_vkCmdPipelineBarrier,
        vkCmdPushConstants: PFN_vkCmdPushConstants,
        vkCmdResetEvent: PFN_vkCmdResetEvent,
        vkCmdResetQueryPool: PFN_vkCmdResetQueryPool,
        vkCmdResolveImage: PFN_vkCmdResolveImage,
        vkCmdSetBlendConstants: PFN_vkCmdSetBlendConstants,
        vkCmdSetDepthBias: PFN_vkCmdSetDepthBias,
        vkCmdSetDepthBounds: PFN_vkCmdSetDepthBounds,
        vkCmdSetEvent: PFN_vkCmdSetEvent,
        vkCmdSetLineWidth: PFN_vkCmdSetLineWidth,
        vkCmdSetScissor: PFN_vkCmdSetScissor,
        vkCmdSetStencilCompareMask: PFN_vkCmdSetStencilCompareMask,
        vkCmdSetStencilReference: PFN_vkCmdSetStencilReference,
        vkCmdSetStencilWriteMask: PFN_vkCmdSetStencilWriteMask,
        vkCmdSetViewport: PFN_vkCmdSetViewport,
        vkCmdUpdateBuffer: PFN_vkCmdUpdateBuffer,
        vkCmdWaitEvents: PFN_vkCmdWaitEvents,
        vkCmdWriteTimestamp: PFN_vkCmdWriteTimestamp,
        vkCreateBuffer: PFN_vkCreateBuffer,
        vkCreateBufferView: PFN_vkCreateBufferView,
        vkCreateCommandPool: PFN_vkCreateCommandPool,
        vkCreateComputePipelines: PFN_vkCreateComputePipelines,
        vkCreateDescriptorPool: PFN_vkCreateDescriptorPool,
        vkCreateDescriptorSetLayout: PFN_vkCreateDescriptorSetLayout,
        vkCreateEvent: PFN_vkCreateEvent,
        vkCreateFence: PFN_vkCreateFence,
        vkCreateFramebuffer: PFN_vkCreateFramebuffer,
        vkCreateGraphicsPipelines: PFN_vkCreateGraphicsPipelines,
        vkCreateImage: PFN_vkCreateImage,
        vkCreateImageView: PFN_vkCreateImageView,
        vkCreatePipelineCache: PFN_vkCreatePipelineCache,
        vkCreatePipelineLayout: PFN_vkCreatePipelineLayout,
        vkCreateQueryPool: PFN_vkCreateQueryPool,
        vkCreateRenderPass: PFN_vkCreateRenderPass,
        vkCreateSampler: PFN_vkCreateSampler,
        vkCreateSemaphore: PFN_vkCreateSemaphore,
        vkCreateShaderModule: PFN_vkCreateShaderModule,
        vkDestroyBuffer: PFN_vkDestroyBuffer,
        vkDestroyBufferView: PFN_vkDestroyBufferView,
        vkDestroyCommandPool: PFN_vkDestroyCommandPool,
        vkDestroyDescriptorPool: PFN_vkDestroyDescriptorPool,
        vkDestroyDescriptorSetLayout: PFN_vkDestroyDescriptorSetLayout,
        vkDestroyDevice: PFN_vkDestroyDevice,
        vkDestroyEvent: PFN_vkDestroyEvent,
        vkDestroyFence: PFN_vkDestroyFence,
        vkDestroyFramebuffer: PFN_vkDestroyFramebuffer,
        vkDestroyImage: PFN_vkDestroyImage,
        vkDestroyImageView: PFN_vkDestroyImageView,
        vkDestroyPipeline: PFN_vkDestroyPipeline,
        vkDestroyPipelineCache: PFN_vkDestroyPipelineCache,
        vkDestroyPipelineLayout: PFN_vkDestroyPipelineLayout,
        vkDestroyQueryPool: PFN_vkDestroyQueryPool,
        vkDestroyRenderPass: PFN_vkDestroyRenderPass,
        vkDestroySampler: PFN_vkDestroySampler,
        vkDestroySemaphore: PFN_vkDestroySemaphore,
        vkDestroyShaderModule: PFN_vkDestroyShaderModule,
        vkDeviceWaitIdle: PFN_vkDeviceWaitIdle,
        vkEndCommandBuffer: PFN_vkEndCommandBuffer,
        vkFlushMappedMemoryRanges: PFN_vkFlushMappedMemoryRanges,
        vkFreeCommandBuffers: PFN_vkFreeCommandBuffers,
        vkFreeDescriptorSets: PFN_vkFreeDescriptorSets,
        vkFreeMemory: PFN_vkFreeMemory,
        vkGetBufferMemoryRequirements: PFN_vkGetBufferMemoryRequirements,
        vkGetDeviceMemoryCommitment: PFN_vkGetDeviceMemoryCommitment,
        vkGetDeviceQueue: PFN_vkGetDeviceQueue,
        vkGetEventStatus: PFN_vkGetEventStatus,
        vkGetFenceStatus: PFN_vkGetFenceStatus,
        vkGetImageMemoryRequirements: PFN_vkGetImageMemoryRequirements,
        vkGetImageSparseMemoryRequirements: PFN_vkGetImageSparseMemoryRequirements,
        vkGetImageSubresourceLayout: PFN_vkGetImageSubresourceLayout,
        vkGetPipelineCacheData: PFN_vkGetPipelineCacheData,
        vkGetQueryPoolResults: PFN_vkGetQueryPoolResults,
        vkGetRenderAreaGranularity: PFN_vkGetRenderAreaGranularity,
        vkInvalidateMappedMemoryRanges: PFN_vkInvalidateMappedMemoryRanges,
        vkMapMemory: PFN_vkMapMemory,
        vkMergePipelineCaches: PFN_vkMergePipelineCaches,
        vkQueueBindSparse: PFN_vkQueueBindSparse,
        vkQueueSubmit: PFN_vkQueueSubmit,
        vkQueueWaitIdle: PFN_vkQueueWaitIdle,
        vkResetCommandBuffer: PFN_vkResetCommandBuffer,
        vkResetCommandPool: PFN_vkResetCommandPool,
        vkResetDescriptorPool: PFN_vkResetDescriptorPool,
        vkResetEvent: PFN_vkResetEvent,
        vkResetFences: PFN_vkResetFences,
        vkSetEvent: PFN_vkSetEvent,
        vkUnmapMemory: PFN_vkUnmapMemory,
        vkUpdateDescriptorSets: PFN_vkUpdateDescriptorSets,
        vkWaitForFences: PFN_vkWaitForFences,
    }
    V1_1 => {
        vkBindBufferMemory2: PFN_vkBindBufferMemory2,
        vkBindImageMemory2: PFN_vkBindImageMemory2,
        vkCmdDispatchBase: PFN_vkCmdDispatchBase,
        vkCmdSetDeviceMask: PFN_vkCmdSetDeviceMask,
        vkCreateDescriptorUpdateTemplate: PFN_vkCreateDescriptorUpdateTemplate,
        vkCreateSamplerYcbcrConversion: PFN_vkCreateSamplerYcbcrConversion,
        vkDestroyDescriptorUpdateTemplate: PFN_vkDestroyDescriptorUpdateTemplate,
        vkDestroySamplerYcbcrConversion: PFN_vkDestroySamplerYcbcrConversion,
        vkGetBufferMemoryRequirements2: PFN_vkGetBufferMemoryRequirements2,
        vkGetDescriptorSetLayoutSupport: PFN_vkGetDescriptorSetLayoutSupport,
        vkGetDeviceGroupPeerMemoryFeatures: PFN_vkGetDeviceGroupPeerMemoryFeatures,
        vkGetDeviceQueue2: PFN_vkGetDeviceQueue2,
        vkGetImageMemoryRequirements2: PFN_vkGetImageMemoryRequirements2,
        vkGetImageSparseMemoryRequirements2: PFN_vkGetImageSparseMemoryRequirements2,
        vkTrimCommandPool: PFN_vkTrimCommandPool,
        vkUpdateDescriptorSetWithTemplate: PFN_vkUpdateDescriptorSetWithTemplate,
    }
    V1_2 => {
        vkCmdBeginRenderPass2: PFN_vkCmdBeginRenderPass2,
        vkCmdDrawIndexedIndirectCount: PFN_vkCmdDrawIndexedIndirectCount,
        vkCmdDrawIndirectCount: PFN_vkCmdDrawIndirectCount,
        vkCmdEndRenderPass2: PFN_vkCmdEndRenderPass2,
        vkCmdNextSubpass2: PFN_vkCmdNextSubpass2,
        vkCreateRenderPass2: PFN_vkCreateRenderPass2,
        vkGetBufferDeviceAddress: PFN_vkGetBufferDeviceAddress,
        vkGetBufferOpaqueCaptureAddress: PFN_vkGetBufferOpaqueCaptureAddress,
        vkGetDeviceMemoryOpaqueCaptureAddress: PFN_vkGetDeviceMemoryOpaqueCaptureAddress,
        vkGetSemaphoreCounterValue: PFN_vkGetSemaphoreCounterValue,
        vkResetQueryPool: PFN_vkResetQueryPool,
        vkSignalSemaphore: PFN_vkSignalSemaphore,
        vkWaitSemaphores: PFN_vkWaitSemaphores,
    }
    V1_3 => {
        vkCmdBeginRendering: PFN_vkCmdBeginRendering,
        vkCmdBindVertexBuffers2: PFN_vkCmdBindVertexBuffers2,
        vkCmdBlitImage2: PFN_vkCmdBlitImage2,
        vkCmdCopyBuffer2: PFN_vkCmdCopyBuffer2,
        vkCmdCopyBufferToImage2: PFN_vkCmdCopyBufferToImage2,
        vkCmdCopyImage2: PFN_vkCmdCopyImage2,
        vkCmdCopyImageToBuffer2: PFN_vkCmdCopyImageToBuffer2,
        vkCmdEndRendering: PFN_vkCmdEndRendering,
        vkCmdPipelineBarrier2: PFN_vkCmdPipelineBarrier2,
        vkCmdResetEvent2: PFN_vkCmdResetEvent2,
        vkCmdResolveImage2: PFN_vkCmdResolveImage2,
        vkCmdSetCullMode: PFN_vkCmdSetCullMode,
        vkCmdSetDepthBiasEnable: PFN_vkCmdSetDepthBiasEnable,
        vkCmdSetDepthBoundsTestEnable: PFN_vkCmdSetDepthBoundsTestEnable,
        vkCmdSetDepthCompareOp: PFN_vkCmdSetDepthCompareOp,
        vkCmdSetDepthTestEnable: PFN_vkCmdSetDepthTestEnable,
        vkCmdSetDepthWriteEnable: PFN_vkCmdSetDepthWriteEnable,
        vkCmdSetEvent2: PFN_vkCmdSetEvent2,
        vkCmdSetFrontFace: PFN_vkCmdSetFrontFace,
        vkCmdSetPrimitiveRestartEnable: PFN_vkCmdSetPrimitiveRestartEnable,
        vkCmdSetPrimitiveTopology: PFN_vkCmdSetPrimitiveTopology,
        vkCmdSetRasterizerDiscardEnable: PFN_vkCmdSetRasterizerDiscardEnable,
        vkCmdSetScissorWithCount: PFN_vkCmdSetScissorWithCount,
        vkCmdSetStencilOp: PFN_vkCmdSetStencilOp,
        vkCmdSetStencilTestEnable: PFN_vkCmdSetStencilTestEnable,
        vkCmdSetViewportWithCount: PFN_vkCmdSetViewportWithCount,
        vkCmdWaitEvents2: PFN_vkCmdWaitEvents2,
        vkCmdWriteTimestamp2: PFN_vkCmdWriteTimestamp2,
        vkCreatePrivateDataSlot: PFN_vkCreatePrivateDataSlot,
        vkDestroyPrivateDataSlot: PFN_vkDestroyPrivateDataSlot,
        vkGetDeviceBufferMemoryRequirements: PFN_vkGetDeviceBufferMemoryRequirements,
        vkGetDeviceImageMemoryRequirements: PFN_vkGetDeviceImageMemoryRequirements,
        vkGetDeviceImageSparseMemoryRequirements: PFN_vkGetDeviceImageSparseMemoryRequirements,
        vkGetPrivateData: PFN_vkGetPrivateData,
        vkQueueSubmit2: PFN_vkQueueSubmit2,
        vkSetPrivateData: PFN_vkSetPrivateData,
    }
    ext("VK_AMD_buffer_marker") => {
        vkCmdWriteBufferMarkerAMD: PFN_vkCmdWriteBufferMarkerAMD,
    }
    ext("VK_AMD_draw_indirect_count") => {
        vkCmdDrawIndexedIndirectCountAMD: PFN_vkCmdDrawIndexedIndirectCount,
        vkCmdDrawIndirectCountAMD: PFN_vkCmdDrawIndirectCount,
    }
    ext("VK_AMD_shader_info") => {
        vkGetShaderInfoAMD: PFN_vkGetShaderInfoAMD,
    }
    ext("VK_ANDROID_external_memory_android_hardware_buffer") => {
        vkGetAndroidHardwareBufferPropertiesANDROID: PFN_vkGetAndroidHardwareBufferPropertiesANDROID,
        vkGetMemoryAndroidHardwareBufferANDROID: PFN_vkGetMemoryAndroidHardwareBufferANDROID,
    }
    ext("VK_EXT_debug_marker") => {
        vkCmdDebugMarkerBeginEXT: PFN_vkCmdDebugMarkerBeginEXT,
        vkCmdDebugMarkerEndEXT: PFN_vkCmdDebugMarkerEndEXT,
        vkCmdDebugMarkerInsertEXT: PFN_vkCmdDebugMarkerInsertEXT,
        vkDebugMarkerSetObjectNameEXT: PFN_vkDebugMarkerSetObjectNameEXT,
        vkDebugMarkerSetObjectTagEXT: PFN_vkDebugMarkerSetObjectTagEXT,
    }
    ext("VK_EXT_debug_utils") => {
        vkCmdBeginDebugUtilsLabelEXT: PFN_vkCmdBeginDebugUtilsLabelEXT,
        vkCmdEndDebugUtilsLabelEXT: PFN_vkCmdEndDebugUtilsLabelEXT,
        vkCmdInsertDebugUtilsLabelEXT: PFN_vkCmdInsertDebugUtilsLabelEXT,
        vkQueueBeginDebugUtilsLabelEXT: PFN_vkQueueBeginDebugUtilsLabelEXT,
        vkQueueEndDebugUtilsLabelEXT: PFN_vkQueueEndDebugUtilsLabelEXT,
        vkQueueInsertDebugUtilsLabelEXT: PFN_vkQueueInsertDebugUtilsLabelEXT,
        vkSetDebugUtilsObjectNameEXT: PFN_vkSetDebugUtilsObjectNameEXT,
        vkSetDebugUtilsObjectTagEXT: PFN_vkSetDebugUtilsObjectTagEXT,
    }
    ext("VK_EXT_discard_rectangles") => {
        vkCmdSetDiscardRectangleEXT: PFN_vkCmdSetDiscardRectangleEXT,
    }
    ext("VK_EXT_display_control") => {
        vkDisplayPowerControlEXT: PFN_vkDisplayPowerControlEXT,
        vkGetSwapchainCounterEXT: PFN_vkGetSwapchainCounterEXT,
        vkRegisterDeviceEventEXT: PFN_vkRegisterDeviceEventEXT,
        vkRegisterDisplayEventEXT: PFN_vkRegisterDisplayEventEXT,
    }
    ext("VK_EXT_extended_dynamic_state") => {
        vkCmdBindVertexBuffers2EXT: PFN_vkCmdBindVertexBuffers2,
        vkCmdSetCullModeEXT: PFN_vkCmdSetCullMode,
        vkCmdSetDepthBoundsTestEnableEXT: PFN_vkCmdSetDepthBoundsTestEnable,
        vkCmdSetDepthCompareOpEXT: PFN_vkCmdSetDepthCompareOp,
        vkCmdSetDepthTestEnableEXT: PFN_vkCmdSetDepthTestEnable,
        vkCmdSetDepthWriteEnableEXT: PFN_vkCmdSetDepthWriteEnable,
        vkCmdSetFrontFaceEXT: PFN_vkCmdSetFrontFace,
        vkCmdSetPrimitiveTopologyEXT: PFN_vkCmdSetPrimitiveTopology,
        vkCmdSetScissorWithCountEXT: PFN_vkCmdSetScissorWithCount,
        vkCmdSetStencilOpEXT: PFN_vkCmdSetStencilOp,
        vkCmdSetStencilTestEnableEXT: PFN_vkCmdSetStencilTestEnable,
        vkCmdSetViewportWithCountEXT: PFN_vkCmdSetViewportWithCount,
    }
    ext("VK_EXT_extended_dynamic_state2") => {
        vkCmdSetDepthBiasEnableEXT: PFN_vkCmdSetDepthBiasEnable,
        vkCmdSetLogicOpEXT: PFN_vkCmdSetLogicOpEXT,
        vkCmdSetPatchControlPointsEXT: PFN_vkCmdSetPatchControlPointsEXT,
        vkCmdSetPrimitiveRestartEnableEXT: PFN_vkCmdSetPrimitiveRestartEnable,
        vkCmdSetRasterizerDiscardEnableEXT: PFN_vkCmdSetRasterizerDiscardEnable,
    }
    ext("VK_EXT_external_memory_host") => {
        vkGetMemoryHostPointerPropertiesEXT: PFN_vkGetMemoryHostPointerPropertiesEXT,
    }
    ext("VK_EXT_hdr_metadata") => {
        vkSetHdrMetadataEXT: PFN_vkSetHdrMetadataEXT,
    }
    ext("VK_EXT_host_query_reset") => {
        vkResetQueryPoolEXT: PFN_vkResetQueryPool,
    }
    ext("VK_EXT_private_data") => {
        vkCreatePrivateDataSlotEXT: PFN_vkCreatePrivateDataSlot,
        vkDestroyPrivateDataSlotEXT: PFN_vkDestroyPrivateDataSlot,
        vkGetPrivateDataEXT: PFN_vkGetPrivateData,
        vkSetPrivateDataEXT: PFN_vkSetPrivateData,
    }
    ext("VK_EXT_sample_locations") => {
        vkCmdSetSampleLocationsEXT: PFN_vkCmdSetSampleLocationsEXT,
    }
    ext("VK_EXT_validation_cache") => {
        vkCreateValidationCacheEXT: PFN_vkCreateValidationCacheEXT,
        vkDestroyValidationCacheEXT: PFN_vkDestroyValidationCacheEXT,
        vkGetValidationCacheDataEXT: PFN_vkGetValidationCacheDataEXT,
        vkMergeValidationCachesEXT: PFN_vkMergeValidationCachesEXT,
    }
    ext("VK_GOOGLE_display_timing") => {
        vkGetPastPresentationTimingGOOGLE: PFN_vkGetPastPresentationTimingGOOGLE,
        vkGetRefreshCycleDurationGOOGLE: PFN_vkGetRefreshCycleDurationGOOGLE,
    }
    ext("VK_KHR_bind_memory2") => {
        vkBindBufferMemory2KHR: PFN_vkBindBufferMemory2,
        vkBindImageMemory2KHR: PFN_vkBindImageMemory2,
    }
    ext("VK_KHR_buffer_device_address") => {
        vkGetBufferDeviceAddressKHR: PFN_vkGetBufferDeviceAddress,
        vkGetBufferOpaqueCaptureAddressKHR: PFN_vkGetBufferOpaqueCaptureAddress,
        vkGetDeviceMemoryOpaqueCaptureAddressKHR: PFN_vkGetDeviceMemoryOpaqueCaptureAddress,
    }
    ext("VK_KHR_copy_commands2") => {
        vkCmdBlitImage2KHR: PFN_vkCmdBlitImage2,
        vkCmdCopyBuffer2KHR: PFN_vkCmdCopyBuffer2,
        vkCmdCopyBufferToImage2KHR: PFN_vkCmdCopyBufferToImage2,
        vkCmdCopyImage2KHR: PFN_vkCmdCopyImage2,
        vkCmdCopyImageToBuffer2KHR: PFN_vkCmdCopyImageToBuffer2,
        vkCmdResolveImage2KHR: PFN_vkCmdResolveImage2,
    }
    ext("VK_KHR_create_renderpass2") => {
        vkCmdBeginRenderPass2KHR: PFN_vkCmdBeginRenderPass2,
        vkCmdEndRenderPass2KHR: PFN_vkCmdEndRenderPass2,
        vkCmdNextSubpass2KHR: PFN_vkCmdNextSubpass2,
        vkCreateRenderPass2KHR: PFN_vkCreateRenderPass2,
    }
    ext("VK_KHR_descriptor_update_template") => {
        vkCreateDescriptorUpdateTemplateKHR: PFN_vkCreateDescriptorUpdateTemplate,
        vkDestroyDescriptorUpdateTemplateKHR: PFN_vkDestroyDescriptorUpdateTemplate,
        vkUpdateDescriptorSetWithTemplateKHR: PFN_vkUpdateDescriptorSetWithTemplate,
    }
    ext("VK_KHR_device_group") => {
        vkCmdDispatchBaseKHR: PFN_vkCmdDispatchBase,
        vkCmdSetDeviceMaskKHR: PFN_vkCmdSetDeviceMask,
        vkGetDeviceGroupPeerMemoryFeaturesKHR: PFN_vkGetDeviceGroupPeerMemoryFeatures,
    }
    ext("VK_KHR_display_swapchain") => {
        vkCreateSharedSwapchainsKHR: PFN_vkCreateSharedSwapchainsKHR,
    }
    ext("VK_KHR_draw_indirect_count") => {
        vkCmdDrawIndexedIndirectCountKHR: PFN_vkCmdDrawIndexedIndirectCount,
        vkCmdDrawIndirectCountKHR: PFN_vkCmdDrawIndirectCount,
    }
    ext("VK_KHR_dynamic_rendering") => {
        vkCmdBeginRenderingKHR: PFN_vkCmdBeginRendering,
        vkCmdEndRenderingKHR: PFN_vkCmdEndRendering,
    }
    ext("VK_KHR_external_fence_fd") => {
        vkGetFenceFdKHR: PFN_vkGetFenceFdKHR,
        vkImportFenceFdKHR: PFN_vkImportFenceFdKHR,
    }
    ext("VK_KHR_external_fence_win32") => {
        vkGetFenceWin32HandleKHR: PFN_vkGetFenceWin32HandleKHR,
        vkImportFenceWin32HandleKHR: PFN_vkImportFenceWin32HandleKHR,
    }
    ext("VK_KHR_external_memory_fd") => {
        vkGetMemoryFdKHR: PFN_vkGetMemoryFdKHR,
        vkGetMemoryFdPropertiesKHR: PFN_vkGetMemoryFdPropertiesKHR,
    }
    ext("VK_KHR_external_memory_win32") => {
        vkGetMemoryWin32HandleKHR: PFN_vkGetMemoryWin32HandleKHR,
        vkGetMemoryWin32HandlePropertiesKHR: PFN_vkGetMemoryWin32HandlePropertiesKHR,
    }
    ext("VK_KHR_external_semaphore_fd") => {
        vkGetSemaphoreFdKHR: PFN_vkGetSemaphoreFdKHR,
        vkImportSemaphoreFdKHR: PFN_vkImportSemaphoreFdKHR,
    }
    ext("VK_KHR_external_semaphore_win32") => {
        vkGetSemaphoreWin32HandleKHR: PFN_vkGetSemaphoreWin32HandleKHR,
        vkImportSemaphoreWin32HandleKHR: PFN_vkImportSemaphoreWin32HandleKHR,
    }
    ext("VK_KHR_get_memory_requirements2") => {
        vkGetBufferMemoryRequirements2KHR: PFN_vkGetBufferMemoryRequirements2,
        vkGetImageMemoryRequirements2KHR: PFN_vkGetImageMemoryRequirements2,
        vkGetImageSparseMemoryRequirements2KHR: PFN_vkGetImageSparseMemoryRequirements2,
    }
    ext("VK_KHR_maintenance1") => {
        vkTrimCommandPoolKHR: PFN_vkTrimCommandPool,
    }
    ext("VK_KHR_maintenance3") => {
        vkGetDescriptorSetLayoutSupportKHR: PFN_vkGetDescriptorSetLayoutSupport,
    }
    ext("VK_KHR_maintenance4") => {
        vkGetDeviceBufferMemoryRequirementsKHR: PFN_vkGetDeviceBufferMemoryRequirements,
        vkGetDeviceImageMemoryRequirementsKHR: PFN_vkGetDeviceImageMemoryRequirements,
        vkGetDeviceImageSparseMemoryRequirementsKHR: PFN_vkGetDeviceImageSparseMemoryRequirements,
    }
    ext("VK_KHR_push_descriptor") => {
        vkCmdPushDescriptorSetKHR: PFN_vkCmdPushDescriptorSetKHR,
    }
    ext("VK_KHR_sampler_ycbcr_conversion") => {
        vkCreateSamplerYcbcrConversionKHR: PFN_vkCreateSamplerYcbcrConversion,
        vkDestroySamplerYcbcrConversionKHR: PFN_vkDestroySamplerYcbcrConversion,
    }
    ext("VK_KHR_shared_presentable_image") => {
        vkGetSwapchainStatusKHR: PFN_vkGetSwapchainStatusKHR,
    }
    ext("VK_KHR_swapchain") => {
        vkAcquireNextImageKHR: PFN_vkAcquireNextImageKHR,
        vkCreateSwapchainKHR: PFN_vkCreateSwapchainKHR,
        vkDestroySwapchainKHR: PFN_vkDestroySwapchainKHR,
        vkGetSwapchainImagesKHR: PFN_vkGetSwapchainImagesKHR,
        vkQueuePresentKHR: PFN_vkQueuePresentKHR,
    }
    ext("VK_KHR_synchronization2") => {
        vkCmdPipelineBarrier2KHR: PFN_vkCmdPipelineBarrier2,
        vkCmdResetEvent2KHR: PFN_vkCmdResetEvent2,
        vkCmdSetEvent2KHR: PFN_vkCmdSetEvent2,
        vkCmdWaitEvents2KHR: PFN_vkCmdWaitEvents2,
        vkCmdWriteTimestamp2KHR: PFN_vkCmdWriteTimestamp2,
        vkQueueSubmit2KHR: PFN_vkQueueSubmit2,
    }
    ext("VK_KHR_timeline_semaphore") => {
        vkGetSemaphoreCounterValueKHR: PFN_vkGetSemaphoreCounterValue,
        vkSignalSemaphoreKHR: PFN_vkSignalSemaphore,
        vkWaitSemaphoresKHR: PFN_vkWaitSemaphores,
    }
    ext("VK_NV_clip_space_w_scaling") => {
        vkCmdSetViewportWScalingNV: PFN_vkCmdSetViewportWScalingNV,
    }
    ext("VK_NV_external_memory_win32") => {
        vkGetMemoryWin32HandleNV: PFN_vkGetMemoryWin32HandleNV,
    }
    Requires::Any(&[
        Requires::All(&[Requires::Extension("VK_KHR_descriptor_update_template"), Requires::Extension("VK_KHR_push_descriptor")]),
        Requires::All(&[Requires::Extension("VK_KHR_push_descriptor"), V1_1]),
    ]) => {
        vkCmdPushDescriptorSetWithTemplateKHR: PFN_vkCmdPushDescriptorSetWithTemplateKHR,
    }
    Requires::Any(&[
        Requires::All(&[Requires::Extension("VK_KHR_device_group"), Requires::Extension("VK_KHR_surface")]),
        Requires::All(&[Requires::Extension("VK_KHR_swapchain"), V1_1]),
    ]) => {
        vkGetDeviceGroupPresentCapabilitiesKHR: PFN_vkGetDeviceGroupPresentCapabilitiesKHR,
        vkGetDeviceGroupSurfacePresentModesKHR: PFN_vkGetDeviceGroupSurfacePresentModesKHR,
    }
    Requires::Any(&[
        Requires::All(&[Requires::Extension("VK_KHR_device_group"), Requires::Extension("VK_KHR_swapchain")]),
        Requires::All(&[Requires::Extension("VK_KHR_swapchain"), V1_1]),
    ]) => {
        vkAcquireNextImage2KHR: PFN_vkAcquireNextImage2KHR,
    }
}
