//! LED 灯
//!
//! 启动阶段的状态指示，点亮/熄灭间隔由调用方传入的延时决定。

use embedded_hal::blocking::delay::DelayMs;
use stm32f1xx_hal::gpio::{Cr, IOPinSpeed, Output, OutputSpeed, PA4};

/// LED 灯
pub struct Led {
    led: PA4<Output>,
}

impl Led {
    /// 初始化 LED 灯
    pub fn new(pa4: PA4, crl: &mut Cr<'A', false>) -> Self {
        let mut pin_led = pa4.into_push_pull_output(crl);
        pin_led.set_speed(crl, IOPinSpeed::Mhz2);

        let mut led = Led { led: pin_led };

        // 默认熄灭
        led.off();

        led
    }

    /// 关闭 LED 灯
    /// 高电平熄灭
    pub fn off(&mut self) {
        self.led.set_high();
    }

    /// 开启 LED 灯
    /// 低电平点灯
    pub fn on(&mut self) {
        self.led.set_low();
    }

    /// 切换 LED 灯关闭/开启状态
    pub fn toggle(&mut self) {
        self.led.toggle();
    }

    /// 闪烁一次
    /// 点亮 on_ms 毫秒后熄灭 off_ms 毫秒
    pub fn blink<D>(&mut self, delay: &mut D, on_ms: u32, off_ms: u32)
    where
        D: DelayMs<u32>,
    {
        self.on();
        delay.delay_ms(on_ms);
        self.off();
        delay.delay_ms(off_ms);
    }
}
