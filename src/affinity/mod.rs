#[cfg(target_os = "linux")]
use crate::error::HarnessError;
use crate::error::Result;

/// Pins the current process to `core_id`. Benchmark processes spawned
/// afterwards inherit the mask.
#[cfg(target_os = "linux")]
pub fn set_affinity(core_id: usize) -> Result<()> {
    if core_id >= libc::CPU_SETSIZE as usize {
        return Err(HarnessError::Affinity {
            core_id,
            message: format!("core id must be below {}", libc::CPU_SETSIZE),
        });
    }

    // SAFETY: `set` is a plain bitmask owned by this frame and sized as the
    // kernel expects.
    let rc = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(core_id, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };

    if rc != 0 {
        return Err(HarnessError::Affinity {
            core_id,
            message: std::io::Error::last_os_error().to_string(),
        });
    }

    log::info!("Pinned to core {}", core_id);
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn set_affinity(core_id: usize) -> Result<()> {
    log::warn!("CPU pinning is not supported on this platform, ignoring core {}", core_id);
    Ok(())
}
