// Mon Feb 09 2026 - Alex

use crate::config::InspectConfig;
use crate::decode::ValueHandle;
use crate::display::DisplayNode;
use crate::memory::MemoryReader;
use crate::utils::hex_string;

/// The generic struct dump the host falls back to when a decoder refuses
/// a value: type name kept, payload shown as bounded raw hex, no claims
/// made about structure.
pub(crate) fn raw_dump(
    reader: &dyn MemoryReader,
    config: &InspectConfig,
    name: &str,
    value: &ValueHandle,
) -> DisplayNode {
    let mut node = DisplayNode::new(name, value.type_name(), value.address().as_u64());
    let size = match value.type_desc().byte_size() {
        0 => reader.pointer_size(),
        n => n,
    };
    let shown = size.min(config.max_raw_bytes);
    node.value = Some(match reader.read_bytes(value.address(), shown) {
        Ok(bytes) => {
            let ellipsis = if shown < size { " ..." } else { "" };
            format!("<raw {} bytes> {}{}", size, hex_string(&bytes), ellipsis)
        }
        Err(_) => "<unreadable>".to_string(),
    });
    node
}
