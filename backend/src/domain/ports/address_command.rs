//! Driving port for address mutations.
//!
//! Inbound adapters hand over validated drafts; the implementation owns the
//! mapping from storage outcomes to domain errors.

use async_trait::async_trait;

use crate::domain::{Address, AddressDraft, AddressId, Error};

/// Domain use-case port for creating, replacing and deleting addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressCommand: Send + Sync {
    /// Store a new address and return it with its identifier.
    async fn create(&self, draft: AddressDraft) -> Result<Address, Error>;

    /// Replace every field of an existing address.
    async fn update(&self, id: AddressId, draft: AddressDraft) -> Result<(), Error>;

    /// Delete an address.
    async fn delete(&self, id: AddressId) -> Result<(), Error>;
}

/// Fixture command that accepts every mutation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAddressCommand;

#[async_trait]
impl AddressCommand for FixtureAddressCommand {
    async fn create(&self, draft: AddressDraft) -> Result<Address, Error> {
        Ok(Address::new(AddressId::new(1), draft))
    }

    async fn update(&self, _id: AddressId, _draft: AddressDraft) -> Result<(), Error> {
        Ok(())
    }

    async fn delete(&self, _id: AddressId) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_command_accepts_mutations() {
        let command = FixtureAddressCommand;
        let draft = AddressDraft::new("s", 1, "z", "c", "k").expect("valid draft");

        let created = command.create(draft.clone()).await.expect("create");
        assert_eq!(created.fields(), &draft);
        command.update(created.id(), draft).await.expect("update");
        command.delete(created.id()).await.expect("delete");
    }
}
