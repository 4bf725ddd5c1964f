#![no_std]
#![no_main]

pub mod config;
pub mod delay;
pub mod hardware;

use defmt_rtt as _;
// global logger
use panic_probe as _;
// adjust HAL import
// memory layout
use stm32f1xx_hal as _;

pub use delay::{wait_milliseconds, wait_milliseconds_uninterrupted, SpinDelay};

// 引脚校验
#[allow(unused)]
enum _Pin {
    // LED 灯
    PA4,

    // 不可使用引脚, 需要重置才可使用
    PA13,
    PA14,
}
