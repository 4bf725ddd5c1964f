//! # 忙等延时
//!
//! 不依赖任何定时器外设、中断或调度器，通过重复执行固定长度的指令序列来实现毫秒级延时，
//! 适用于时钟尚未初始化的早期启动阶段或关闭中断的上下文。
//!
//! **警告: 该延时并不精确，只是一个粗略的估计！**
//!
//! - 时长按 [`SYSTEM_CORE_CLOCK_HZ`](crate::config::SYSTEM_CORE_CLOCK_HZ) 计算，实际内核时钟与之不符时延时会按比例偏差；
//! - 只适用于没有中断、没有其他线程抢占 CPU 的裸机环境，期间发生的中断会让实际延时变长；
//! - 分支预取、Flash 等待周期等因素会带来若干百分比的误差。
//!
//! 以上误差在函数内部都无法检测，因此不会返回任何错误。

use embedded_hal::blocking::delay::DelayMs;

use crate::config::{CYCLES_PER_ITERATION, CYCLES_PER_MS};
#[cfg(not(all(target_arch = "arm", target_feature = "thumb2")))]
use crate::config::ITERATIONS_PER_MS;

/// 毫秒级忙等延时
/// delay_ms 延时时长，范围：0~usize::MAX
///
/// 为 0 时立即返回。
/// 不输出日志，除时间外没有任何副作用。
pub fn wait_milliseconds(delay_ms: usize) {
    for _ in 0..delay_ms {
        spin_one_millisecond();
    }
}

/// 关闭中断的毫秒级忙等延时
///
/// 在临界区内执行与 [`wait_milliseconds`] 相同的计数循环，中断不会拉长延时，
/// 但在此期间所有可屏蔽中断都会被挂起。
pub fn wait_milliseconds_uninterrupted(delay_ms: usize) {
    cortex_m::interrupt::free(|_| wait_milliseconds(delay_ms));
}

/// 执行一毫秒的计数循环
///
/// 计数器从 0 开始，每次迭代加 4，直到达到 CYCLES_PER_MS;
/// 循环体固定为 4 条指令: cmp / itt / addlt / blt。
/// 使用内联汇编，迭代的指令数不随编译器优化等级变化。
#[cfg(all(target_arch = "arm", target_feature = "thumb2"))]
#[inline(always)]
fn spin_one_millisecond() {
    unsafe {
        core::arch::asm!(
            "2:",
            "cmp {count}, {limit}",
            "itt lt",
            "addlt {count}, {count}, #{step}",
            "blt 2b",
            limit = in(reg) CYCLES_PER_MS,
            count = inout(reg) 0u32 => _,
            step = const CYCLES_PER_ITERATION,
            options(nomem, nostack),
        );
    }
}

/// 执行一毫秒的计数循环
///
/// 没有 Thumb-2 指令时的实现，迭代 ITERATIONS_PER_MS 次，计数器经过 `black_box`，
/// 编译器无法合并、展开或消除循环，但每次迭代的指令数取决于目标架构。
#[cfg(not(all(target_arch = "arm", target_feature = "thumb2")))]
#[inline(always)]
fn spin_one_millisecond() {
    let mut count: u32 = 0;
    for _ in 0..ITERATIONS_PER_MS {
        count = core::hint::black_box(count + CYCLES_PER_ITERATION);
    }
    debug_assert!(count >= CYCLES_PER_MS);
}

/// 忙等延时
///
/// 实现 `embedded-hal` 的 DelayMs，可以在 SysTick 或定时器配置之前交给驱动使用。
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinDelay;

impl SpinDelay {
    pub fn new() -> Self {
        SpinDelay
    }
}

impl DelayMs<u32> for SpinDelay {
    fn delay_ms(&mut self, ms: u32) {
        // 16 位目标上超出范围时取最大值
        wait_milliseconds(usize::try_from(ms).unwrap_or(usize::MAX));
    }
}

impl DelayMs<u16> for SpinDelay {
    fn delay_ms(&mut self, ms: u16) {
        wait_milliseconds(usize::from(ms));
    }
}

impl DelayMs<u8> for SpinDelay {
    fn delay_ms(&mut self, ms: u8) {
        wait_milliseconds(usize::from(ms));
    }
}

/// 统计一次延时消耗的时钟周期
#[cfg(test)]
fn measure<F: FnOnce()>(f: F) -> u32 {
    let start = cortex_m::peripheral::DWT::cycle_count();
    f();
    cortex_m::peripheral::DWT::cycle_count().wrapping_sub(start)
}
