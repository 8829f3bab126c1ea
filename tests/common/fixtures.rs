//! Test fixtures: in-memory PNG icons and catalog entities.

use asset_colors::imaging::encode_png;
use asset_colors::models::{Catalog, ChainEntity, TokenEntity};
use ring_sampler::{RasterImage, Rgb};
use std::path::Path;

pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Opaque square icon of one color
pub fn solid_square_png(size: u32, color: Rgb) -> Vec<u8> {
    encode_png(&RasterImage::filled(size, size, color)).unwrap()
}

/// Filled disk of `color` on a transparent square canvas
pub fn solid_circle_png(size: u32, color: Rgb) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let center = size as f64 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            if (dx * dx + dy * dy).sqrt() <= center {
                let i = ((y * size + x) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
    }
    encode_png(&RasterImage::from_rgba(size, size, data).unwrap()).unwrap()
}

pub fn chain(id: &str, name: &str, icon_uri: &str) -> ChainEntity {
    ChainEntity {
        chain_id: id.to_string(),
        network_name: name.to_string(),
        icon_uri: icon_uri.to_string(),
        native_currency_symbol: "ETH".to_string(),
        is_evmos: false,
    }
}

pub fn token(chain_id: &str, address: &str, symbol: &str) -> TokenEntity {
    TokenEntity {
        chain_id: chain_id.to_string(),
        address: address.to_string(),
        symbol: symbol.to_string(),
        name: format!("{symbol} token"),
        icon_uri: format!("https://cdn.example/{symbol}.png"),
    }
}

pub fn catalog(chains: Vec<ChainEntity>, tokens: Vec<TokenEntity>) -> Catalog {
    Catalog { chains, tokens }
}

/// Write a token icon where `IconStore` expects it: `{dir}/{key}.png`
pub fn write_token_icon(dir: &Path, token: &TokenEntity, png: &[u8]) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(format!("{}.png", token.key())), png).unwrap();
}

/// Registry payload in the wire format
pub fn registry_payload() -> serde_json::Value {
    serde_json::json!({
        "chains": [{
            "chainId": "1",
            "networkName": "Ethereum",
            "chainIconURI": "https://cdn.example/webp/ethereum.webp",
            "nativeCurrency": { "symbol": "ETH" }
        }],
        "tokens": [{
            "chainId": "1",
            "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "symbol": "USDC",
            "name": "USD Coin",
            "logoURI": "https://cdn.example/usdc.png"
        }]
    })
}
