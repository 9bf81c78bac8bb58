//! Storage Connector - Connessione condivisa al document store
//!
//! Il connector memorizza un unico handle verso il database:
//! - se l'handle esiste già lo restituisce subito;
//! - altrimenti avvia un tentativo di connessione e lo condivide con tutti i
//!   chiamanti concorrenti;
//! - se il tentativo fallisce lo scarta, così la chiamata successiva riprova.
//!
//! Non c'è nessuna politica di retry o backoff oltre a questo.

use crate::core::Config;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, instrument};

type Attempt<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;
type OpenFn<T, E> = Box<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

enum Slot<T, E> {
    Empty,
    Connecting(Attempt<T, E>),
    Ready(T),
}

/// Handle cache con un solo tentativo di connessione in volo alla volta.
///
/// `T` è l'handle (per Mongo un [`Database`]), `E` l'errore di connessione.
/// Entrambi devono essere `Clone` perché lo stesso risultato viene
/// consegnato a tutti i chiamanti in attesa.
pub struct Connector<T = Database, E = mongodb::error::Error> {
    slot: Mutex<Slot<T, E>>,
    open: OpenFn<T, E>,
}

impl<T, E> Connector<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + std::fmt::Display + Send + Sync + 'static,
{
    /// Crea un connector che usa `open` per ogni nuovo tentativo.
    /// Non si connette finché non viene chiamato [`Connector::connect`].
    pub fn new<F>(open: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync + 'static,
    {
        Self {
            slot: Mutex::new(Slot::Empty),
            open: Box::new(open),
        }
    }

    /// Ritorna l'handle in cache oppure si unisce al tentativo in corso
    /// (avviandone uno nuovo se non ce n'è).
    pub async fn connect(&self) -> Result<T, E> {
        let attempt = {
            let mut slot = self.lock();
            match &*slot {
                Slot::Ready(handle) => {
                    debug!("Using cached database connection");
                    return Ok(handle.clone());
                }
                Slot::Connecting(attempt) => {
                    debug!("Joining in-flight connection attempt");
                    attempt.clone()
                }
                Slot::Empty => {
                    debug!("Starting new connection attempt");
                    let attempt = (self.open)().shared();
                    *slot = Slot::Connecting(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;

        let mut slot = self.lock();
        // solo il tentativo ancora registrato può cambiare lo stato
        let is_current = matches!(&*slot, Slot::Connecting(current) if current.ptr_eq(&attempt));
        if is_current {
            match &result {
                Ok(handle) => {
                    info!("New database connection established");
                    *slot = Slot::Ready(handle.clone());
                }
                Err(err) => {
                    error!("Database connection attempt failed: {}", err);
                    *slot = Slot::Empty;
                }
            }
        }
        result
    }

    /// True se un handle è già in cache
    pub fn is_connected(&self) -> bool {
        matches!(&*self.lock(), Slot::Ready(_))
    }

    /// Svuota la cache restituendo l'handle, se presente
    pub fn take(&self) -> Option<T> {
        match std::mem::replace(&mut *self.lock(), Slot::Empty) {
            Slot::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T, E>> {
        // la sezione critica non può lasciare lo stato a metà
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Connector {
    /// Connector MongoDB configurato da [`Config`]
    pub fn mongo(config: &Config) -> Self {
        let uri = config.database_url.clone();
        let database_name = config.database_name.clone();
        let timeout = config.connect_timeout();
        Self::new(move || {
            let uri = uri.clone();
            let database_name = database_name.clone();
            async move { open_database(&uri, &database_name, timeout).await }.boxed()
        })
    }

    /// Chiude la connessione in cache, da chiamare allo spegnimento del processo
    pub async fn shutdown(&self) {
        if let Some(database) = self.take() {
            info!("Closing database connection");
            database.client().clone().shutdown().await;
        }
    }
}

/// Un singolo tentativo: parse dell'URI, creazione del client e `ping`
/// per fallire subito se il server non è raggiungibile.
#[instrument(skip(uri), fields(database = %database_name))]
async fn open_database(
    uri: &str,
    database_name: &str,
    timeout: std::time::Duration,
) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(timeout);
    options.connect_timeout = Some(timeout);
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    let database = client.database(database_name);
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(database)
}
