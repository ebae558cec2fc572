//! ELF Image Loader.
//!
//! This module materializes a statically linked MIPS executable. It performs:
//! 1. **Validation:** Header size, little-endian encoding, `EM_MIPS` machine, `ET_EXEC` type.
//! 2. **Section loading:** One segment per `SHF_ALLOC` section; `SHT_NOBITS` sections stay zero-filled.
//! 3. **Register setup:** Entry point into `pc`/`npc`, and the global pointer from the
//!    `PT_MIPS_REGINFO` segment when the image carries one.
//!
//! Every multi-byte field is read through the `object` crate's little-endian
//! accessors. Load errors are reported before any instruction executes.

use object::LittleEndian;
use object::elf::{self, FileHeader32};
use object::read::elf::{FileHeader, ProgramHeader, SectionHeader};
use tracing::debug;

use crate::common::LoadError;
use crate::common::constants::GP_SEED_END_OFFSET;
use crate::core::Cpu;
use crate::isa::abi;
use crate::soc::{AddressSpace, SegmentId};

/// Size of the ELF32 file header in bytes.
pub const ELF32_HEADER_SIZE: usize = std::mem::size_of::<FileHeader32<LittleEndian>>();

/// Summary of a loaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    /// Entry point written to `pc`.
    pub entry: u32,
    /// Global-pointer seed written to `$gp`, if the image had one.
    pub gp: Option<u32>,
    /// Segments allocated for the image's sections, in section order.
    pub segments: Vec<SegmentId>,
}

/// Loads an ELF executable into `mem` and primes `cpu` to run it.
///
/// # Arguments
///
/// * `image` - The complete file contents.
/// * `mem` - Address space receiving one segment per loadable section.
/// * `cpu` - CPU whose `pc`, `npc` and `$gp` are initialized.
///
/// # Returns
///
/// A summary of what was loaded, or the first `LoadError` encountered.
/// Overlapping sections are rejected by the segment allocator.
pub fn load_elf(image: &[u8], mem: &mut AddressSpace, cpu: &mut Cpu) -> Result<LoadedImage, LoadError> {
    if image.len() < ELF32_HEADER_SIZE {
        return Err(LoadError::TooSmall {
            len: image.len(),
            min: ELF32_HEADER_SIZE,
        });
    }

    let header = FileHeader32::<LittleEndian>::parse(image)?;
    if header.e_ident().data != elf::ELFDATA2LSB {
        return Err(LoadError::NotLittleEndian);
    }
    let endian = header.endian()?;

    let machine = header.e_machine(endian);
    if machine != elf::EM_MIPS {
        return Err(LoadError::WrongMachine { machine });
    }
    let kind = header.e_type(endian);
    if kind != elf::ET_EXEC {
        return Err(LoadError::NotExecutable { kind });
    }

    let mut segments = Vec::new();
    let sections = header.sections(endian, image)?;
    for section in sections.iter() {
        if section.sh_flags(endian) & elf::SHF_ALLOC == 0 {
            continue;
        }
        let addr = section.sh_addr(endian);
        let size = section.sh_size(endian);
        if size == 0 {
            continue;
        }
        let name = String::from_utf8_lossy(sections.section_name(endian, section)?).into_owned();

        let id = mem.allocate_segment(addr, size, &name)?;
        segments.push(id);

        if section.sh_type(endian) != elf::SHT_NOBITS {
            let bytes = section
                .data(endian, image)
                .map_err(|_| LoadError::Truncated {
                    what: format!("section '{name}'"),
                })?;
            mem.write_bytes(addr, bytes)?;
        }
        debug!(
            name,
            addr = %format_args!("{addr:#010x}"),
            size,
            nobits = section.sh_type(endian) == elf::SHT_NOBITS,
            "section loaded"
        );
    }

    let mut gp = None;
    for phdr in header.program_headers(endian, image)? {
        if phdr.p_type(endian) != elf::PT_MIPS_REGINFO {
            continue;
        }
        let end = u64::from(phdr.p_offset(endian)) + u64::from(phdr.p_filesz(endian));
        let seed = end
            .checked_sub(u64::from(GP_SEED_END_OFFSET))
            .filter(|_| u64::from(phdr.p_filesz(endian)) >= u64::from(GP_SEED_END_OFFSET))
            .and_then(|start| image.get(start as usize..end as usize))
            .ok_or_else(|| LoadError::Truncated {
                what: "register-info segment".to_string(),
            })?;
        let mut word = [0u8; 4];
        word.copy_from_slice(seed);
        gp = Some(u32::from_le_bytes(word));
    }

    let entry = header.e_entry(endian);
    cpu.set_entry(entry);
    if let Some(gp) = gp {
        cpu.regs.write(abi::REG_GP, gp);
    }
    debug!(
        entry = %format_args!("{entry:#010x}"),
        gp = ?gp,
        segments = segments.len(),
        "image loaded"
    );

    Ok(LoadedImage {
        entry,
        gp,
        segments,
    })
}
