// Fri Feb 06 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Table size {bytes} bytes is not a whole number of {pointer_size}-byte slots")]
    RaggedTableSize { bytes: usize, pointer_size: usize },
    #[error("No known unordered-container layout spans {units} pointer slots")]
    UnknownTableSize { units: usize },
    #[error("A {units}-slot table matches more than one layout and the iterator type is unavailable")]
    AmbiguousVariant { units: usize },
    #[error("Iterator arity {arity} matches no layout for a {units}-slot table")]
    UnmatchedIteratorArity { units: usize, arity: usize },
}

/// The historical binary layouts of `boost::unordered` hash tables. The
/// table shrank release over release, so the slot count of the container
/// struct identifies the era; the 6-slot era needs the iterator type's
/// template arity to tell the grouped and forward schemes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnorderedLayout {
    /// 7 slots. Chained buckets with a cached begin bucket.
    V1_48,
    /// 6 slots, two-argument iterator. Chained buckets, no begin cache.
    V1_55,
    /// 6 or 5 slots, one-argument iterator. All nodes on one forward list
    /// threaded through the table head.
    V1_58Plus,
}

impl UnorderedLayout {
    /// Pure classification from observable facts only: the container's
    /// byte size and, where needed, the template arity of its iterator
    /// type. Never guesses on an unrecognized size.
    pub fn classify(
        byte_size: usize,
        pointer_size: usize,
        iterator_arity: Option<usize>,
    ) -> Result<Self, LayoutError> {
        if byte_size == 0 || byte_size % pointer_size != 0 {
            return Err(LayoutError::RaggedTableSize { bytes: byte_size, pointer_size });
        }
        let units = byte_size / pointer_size;
        match units {
            7 => Ok(Self::V1_48),
            6 => match iterator_arity {
                Some(2) => Ok(Self::V1_55),
                Some(1) => Ok(Self::V1_58Plus),
                Some(arity) => Err(LayoutError::UnmatchedIteratorArity { units, arity }),
                None => Err(LayoutError::AmbiguousVariant { units }),
            },
            5 => Ok(Self::V1_58Plus),
            _ => Err(LayoutError::UnknownTableSize { units }),
        }
    }

    /// Table struct format for the codec, given the slot count the value
    /// actually occupies. Field order per variant:
    ///
    ///   V1_48:    buckets, bucket_count, cached_begin, size, mlf, max_load
    ///   V1_55:    buckets, bucket_count, size, mlf, max_load
    ///   V1_58+/6: bucket_count, size, mlf, max_load, buckets, head
    ///   V1_58+/5: bucket_count, size, mlf, buckets, head
    pub fn table_format(&self, units: usize) -> &'static str {
        match (self, units) {
            (Self::V1_48, _) => "ppppfp",
            (Self::V1_55, _) => "pppfp",
            (Self::V1_58Plus, 6) => "ppfppp",
            (Self::V1_58Plus, _) => "ppfpp",
        }
    }

    /// Bucket-array walking (as opposed to following one forward list).
    pub fn walks_buckets(&self) -> bool {
        matches!(self, Self::V1_48 | Self::V1_55)
    }
}
