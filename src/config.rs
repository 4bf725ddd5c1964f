//! 全局配置
//!
//! 延时依赖的时钟频率只是一个假设值，不会在运行时读取硬件；
//! 修改时钟配置时必须同步修改这里。

/// 内核时钟频率，单位 Hz
/// 必须与 main.rs 中 freeze 的 sysclk 一致 (HSI 8MHz 经 PLL 倍频到 16MHz)
pub const SYSTEM_CORE_CLOCK_HZ: u32 = 16_000_000;

/// 每毫秒的时钟周期数 (整除截断)
pub const CYCLES_PER_MS: u32 = SYSTEM_CORE_CLOCK_HZ / 1000;

/// 计数循环每次迭代的指令数, 也是计数器每次的增量
pub const CYCLES_PER_ITERATION: u32 = 4;

/// 每毫秒计数循环的迭代次数
pub const ITERATIONS_PER_MS: u32 = CYCLES_PER_MS.div_ceil(CYCLES_PER_ITERATION);

// 时钟低于 1kHz 时延时退化为空操作
const _: () = assert!(CYCLES_PER_MS > 0);

/// LED 点亮时长，单位 ms
pub const BLINK_ON_MS: u32 = 200;
/// LED 熄灭时长，单位 ms
pub const BLINK_OFF_MS: u32 = 800;
