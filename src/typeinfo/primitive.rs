// Tue Feb 03 2026 - Alex

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Char,
    SChar,
    UChar,
    WChar,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl PrimitiveType {
    pub fn size(self) -> usize {
        match self {
            Self::Bool | Self::Char | Self::SChar | Self::UChar => 1,
            Self::I16 | Self::U16 => 2,
            Self::WChar | Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    pub fn alignment(self) -> usize {
        self.size()
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Self::SChar | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Maps a C++ spelling to a fixed-width primitive. `long` and
    /// `unsigned long` follow the LP64/ILP32 convention of the target, so
    /// the pointer size decides their width.
    pub fn from_cpp_name(name: &str, pointer_size: usize) -> Option<Self> {
        let p = match name {
            "bool" => Self::Bool,
            "char" => Self::Char,
            "signed char" => Self::SChar,
            "unsigned char" => Self::UChar,
            "wchar_t" | "char32_t" => Self::WChar,
            "short" | "short int" | "signed short" => Self::I16,
            "unsigned short" | "unsigned short int" | "char16_t" => Self::U16,
            "int" | "signed int" | "signed" => Self::I32,
            "unsigned int" | "unsigned" => Self::U32,
            "long long" | "long long int" | "int64_t" => Self::I64,
            "unsigned long long" | "unsigned long long int" | "uint64_t" => Self::U64,
            "long" | "long int" => {
                if pointer_size == 8 {
                    Self::I64
                } else {
                    Self::I32
                }
            }
            "unsigned long" | "unsigned long int" | "size_t" => {
                if pointer_size == 8 {
                    Self::U64
                } else {
                    Self::U32
                }
            }
            "float" => Self::F32,
            "double" => Self::F64,
            "int8_t" => Self::SChar,
            "uint8_t" => Self::UChar,
            "int16_t" => Self::I16,
            "uint16_t" => Self::U16,
            "int32_t" => Self::I32,
            "uint32_t" => Self::U32,
            _ => return None,
        };
        Some(p)
    }
}
