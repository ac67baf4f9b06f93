// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `layout`

#[cfg(test)]
mod tests {
    use crate::layout::OutputLayout;
    use std::path::Path;

    #[test]
    fn test_default_layout_uses_bind_paths() {
        let layout = OutputLayout::default();

        assert_eq!(
            layout.named_conf_path(),
            Path::new("/etc/bind/named.conf.local")
        );
        assert_eq!(layout.zones_dir(), Path::new("/etc/bind/zones"));
    }

    #[test]
    fn test_zone_file_path() {
        let layout = OutputLayout::default();
        assert_eq!(
            layout.zone_file_path("example.com"),
            Path::new("/etc/bind/zones/example.com.db")
        );
    }

    #[test]
    fn test_zone_file_path_keeps_every_label() {
        let layout = OutputLayout::new("/tmp/named.conf.local", "/tmp/zones");
        assert_eq!(
            layout.zone_file_path("a.b.example.co.uk"),
            Path::new("/tmp/zones/a.b.example.co.uk.db")
        );
    }
}
