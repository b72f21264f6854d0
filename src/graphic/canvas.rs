//  Created by Hasebe Masahiko on 2025/06/15.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::prelude::*;

//*******************************************************************
//      Canvas
//          pixel coordinates: origin top-left, y grows downward
//*******************************************************************
pub trait Canvas {
    /// 現在のバッファサイズ [px]
    fn size(&self) -> (u32, u32);
    /// バッファサイズを合わせる
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self, color: Srgb<u8>);
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Srgb<u8>);
    fn polyline(&mut self, points: &[Vec2], weight: f32, color: Srgb<u8>) {
        for seg in points.windows(2) {
            self.line(seg[0], seg[1], weight, color);
        }
    }
    fn disc(&mut self, center: Vec2, radius: f32, color: Srgb<u8>);
}

pub fn rgb(c: (u8, u8, u8)) -> Srgb<u8> {
    srgb::<u8>(c.0, c.1, c.2)
}

//*******************************************************************
//      Window surface through nannou::Draw
//          nannou works in points with the origin at the center
//*******************************************************************
pub struct NannouCanvas {
    draw: Draw,
    width: u32,
    height: u32,
    scale_factor: f32,
}
impl NannouCanvas {
    pub fn new(draw: Draw, width: u32, height: u32, scale_factor: f32) -> Self {
        Self {
            draw,
            width,
            height,
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
        }
    }
    fn to_points(&self, p: Vec2) -> Vec2 {
        let w = self.width as f32 / self.scale_factor;
        let h = self.height as f32 / self.scale_factor;
        pt2(
            p.x / self.scale_factor - w / 2.0,
            h / 2.0 - p.y / self.scale_factor,
        )
    }
}
impl Canvas for NannouCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn resize(&mut self, width: u32, height: u32) {
        // swapchain 自体は nannou がウィンドウに追従させる
        self.width = width;
        self.height = height;
    }
    fn clear(&mut self, color: Srgb<u8>) {
        self.draw.background().color(color);
    }
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Srgb<u8>) {
        self.draw
            .line()
            .start(self.to_points(from))
            .end(self.to_points(to))
            .weight(weight / self.scale_factor)
            .color(color);
    }
    fn polyline(&mut self, points: &[Vec2], weight: f32, color: Srgb<u8>) {
        let pts: Vec<Vec2> = points.iter().map(|p| self.to_points(*p)).collect();
        self.draw
            .polyline()
            .weight(weight / self.scale_factor)
            .points(pts)
            .color(color);
    }
    fn disc(&mut self, center: Vec2, radius: f32, color: Srgb<u8>) {
        let c = self.to_points(center);
        self.draw
            .ellipse()
            .x_y(c.x, c.y)
            .radius(radius / self.scale_factor)
            .color(color);
    }
}

//*******************************************************************
//      RGBA software raster
//*******************************************************************
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}
impl PixelBuffer {
    const LINE_STAMP_PX: f32 = 0.5;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }
    fn put(&mut self, x: i64, y: i64, color: Srgb<u8>) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[color.red, color.green, color.blue, 255]);
    }
}
impl Canvas for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            *self = PixelBuffer::new(width, height);
        }
    }
    fn clear(&mut self, color: Srgb<u8>) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.red, color.green, color.blue, 255]);
        }
    }
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Srgb<u8>) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let radius = (weight / 2.0).max(0.5);
        let len = from.distance(to);
        let steps = ((len / Self::LINE_STAMP_PX).ceil() as u32).max(1);
        for i in 0..=steps {
            let p = from.lerp(to, i as f32 / steps as f32);
            self.disc(p, radius, color);
        }
    }
    fn disc(&mut self, center: Vec2, radius: f32, color: Srgb<u8>) {
        if !(center.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }
        let x0 = (center.x - radius).floor().max(-1.0) as i64;
        let x1 = (center.x + radius).ceil().min(self.width as f32) as i64;
        let y0 = (center.y - radius).floor().max(-1.0) as i64;
        let y1 = (center.y + radius).ceil().min(self.height as f32) as i64;
        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_and_resize() {
        let mut pb = PixelBuffer::new(4, 3);
        assert_eq!(pb.as_bytes().len(), 48);
        pb.clear(rgb((1, 2, 3)));
        assert_eq!(pb.pixel(3, 2), Some([1, 2, 3, 255]));
        assert_eq!(pb.pixel(4, 0), None);

        pb.resize(10, 5);
        assert_eq!(pb.size(), (10, 5));
        assert_eq!(pb.as_bytes().len(), 200);
        assert_eq!(pb.pixel(9, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn disc_fills_center_only() {
        let mut pb = PixelBuffer::new(20, 20);
        pb.disc(pt2(10.0, 10.0), 3.0, rgb((255, 0, 0)));
        assert_eq!(pb.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(pb.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(pb.pixel(15, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn line_covers_endpoints_and_clips() {
        let mut pb = PixelBuffer::new(10, 10);
        pb.line(pt2(-5.0, 2.5), pt2(20.0, 2.5), 1.0, rgb((0, 0, 255)));
        for x in 0..10 {
            assert_eq!(pb.pixel(x, 2), Some([0, 0, 255, 255]));
        }
        assert_eq!(pb.pixel(0, 6), Some([0, 0, 0, 0]));
        pb.line(pt2(f32::NAN, 0.0), pt2(1.0, 1.0), 1.0, rgb((9, 9, 9)));
    }
}
