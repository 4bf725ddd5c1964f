//! 启动阶段的 LED 闪烁
//!
//! 系统时钟配置为 SYSTEM_CORE_CLOCK_HZ 后，使用忙等延时控制 LED 闪烁，
//! 不占用 SysTick 与任何定时器。
#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, println, warn};
use stm32_spin_delay::{
    config::{BLINK_OFF_MS, BLINK_ON_MS, SYSTEM_CORE_CLOCK_HZ},
    hardware::led::Led,
    wait_milliseconds, SpinDelay,
};
use stm32f1xx_hal::{
    flash::FlashExt,
    pac,
    prelude::{_fugit_RateExtU32, _stm32_hal_gpio_GpioExt, _stm32_hal_rcc_RccExt},
};

#[entry]
fn main() -> ! {
    // 获取外设实例
    let dp = pac::Peripherals::take().unwrap();
    let mut flash = dp.FLASH.constrain();
    let rcc = dp.RCC.constrain();
    let mut gpioa = dp.GPIOA.split();

    // 初始化时钟
    // 忙等延时按 SYSTEM_CORE_CLOCK_HZ 计算，两者必须一致
    let clocks = rcc
        .cfgr
        .sysclk(SYSTEM_CORE_CLOCK_HZ.Hz())
        .freeze(&mut flash.acr);
    if clocks.sysclk().raw() != SYSTEM_CORE_CLOCK_HZ {
        warn!(
            "sysclk {} Hz != assumed {} Hz, spin delay will drift",
            clocks.sysclk().raw(),
            SYSTEM_CORE_CLOCK_HZ
        );
    }

    // 等待外设上电稳定
    wait_milliseconds(100);
    println!("init start ...");

    // 初始化 LED 灯
    let mut led = Led::new(gpioa.pa4, &mut gpioa.crl);
    let mut delay = SpinDelay::new();

    println!("init end ...");

    let mut count: u32 = 0;
    loop {
        led.blink(&mut delay, BLINK_ON_MS, BLINK_OFF_MS);
        count = count.wrapping_add(1);
        info!("blink {}", count);
    }
}
