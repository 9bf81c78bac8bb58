//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni sul document store per una specifica entità.
//! Il service lavora solo contro i trait in `traits`, quindi lo store concreto
//! (MongoDB o in-memory) viene scelto da chi costruisce l'`AppState`.

// ************************* NOTA SUL DRIVER MONGODB ************************* //

/*
   Il driver usa il builder pattern con lazy execution: ogni operazione restituisce
   un'azione che si configura con la dot notation e parte solo con `.await`.
       collection.find(doc! {}).sort(doc! { "createdAt": -1 }).skip(10).limit(10).await?
   `find` restituisce un cursore (uno Stream), da raccogliere con `try_collect()`.
   Per update e delete usiamo `find_one_and_*`: una sola operazione atomica sul
   documento che restituisce anche il documento (dopo l'update, prima della delete).
   I filtri si scrivono con la macro `doc!` e i nomi dei campi sono quelli serializzati
   (camelCase, `_id` per l'identificatore).
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod invitation;
pub mod memory;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, InvitationStore, Read, ReadPage, StoreError, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use invitation::InvitationRepository;
pub use memory::MemoryInvitationRepository;
